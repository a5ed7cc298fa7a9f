//! Missing calendar days inside the recorded range.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::store::RecordStore;

/// Returns every calendar day between the earliest and latest recorded day
/// (inclusive range) that has no record, in ascending order.
///
/// An empty store, or one whose only records carry invalid dates, has no
/// range and yields nothing; so does a single-day store. Invalid-date
/// records never contribute to the range. Purely a data-quality query; the
/// moisture chain ignores gaps.
pub fn missing_dates(store: &RecordStore) -> Vec<NaiveDate> {
    let present: BTreeSet<NaiveDate> = store.days().collect();
    let (Some(&first), Some(&last)) = (present.first(), present.last()) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| !present.contains(day))
        .collect()
}
