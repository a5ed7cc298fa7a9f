//! The recompute coordinator: restores the moisture chain after any edit.
//!
//! Every record's moisture depends on its predecessor's, so an insert,
//! update, deletion, or parameter change invalidates everything from the
//! edit point forward. The coordinator always folds to the end of the
//! store; a partial recompute would leave later records inconsistent.

use tracing::debug;

use demeter_store::{DayRecord, LogDate, RecordStore};

use crate::moisture::daily_moisture;
use crate::params::MoistureParams;
use crate::rainfall::record_rainfall;

/// Re-derives the moisture of every record at or after `start`.
///
/// The fold is seeded with the stored moisture of the record immediately
/// preceding `start` (zero when there is none) and feeds each day's output
/// into the next. Records before `start` are untouched. Returns the number
/// of records rewritten; when no record lies at or after `start` the call
/// is a no-op returning zero.
pub fn recompute_from(store: &mut RecordStore, start: &LogDate, params: &MoistureParams) -> usize {
    let mut prev = store.prev_record(start).map_or(0.0, |rec| rec.moisture);
    let mut rewritten = 0;
    for record in store.iter_mut_from(start) {
        let effective = record_rainfall(record);
        let moisture = daily_moisture(prev, effective, record.watered, params);
        record.moisture = moisture;
        prev = moisture;
        rewritten += 1;
    }
    debug!(start = %start, rewritten, "moisture chain recomputed");
    rewritten
}

/// Re-derives every record's moisture from a zero starting balance.
///
/// The settings-change and cold-migration path: a new threshold or period
/// changes the decay for every day, so nothing stored stays valid.
pub fn recompute_all(store: &mut RecordStore, params: &MoistureParams) -> usize {
    let Some(first) = store.first().map(|rec| rec.date.clone()) else {
        return 0;
    };
    recompute_from(store, &first, params)
}

/// Inserts or replaces a day's record and restores the chain from its date.
pub fn upsert_record(store: &mut RecordStore, record: DayRecord, params: &MoistureParams) {
    let start = record.date.clone();
    store.upsert(record);
    recompute_from(store, &start, params);
}

/// Removes a day's record, then restores the chain from the next recorded
/// date: the successor's predecessor has changed.
///
/// Removing an absent date is a no-op returning `None`.
pub fn delete_record(
    store: &mut RecordStore,
    date: &LogDate,
    params: &MoistureParams,
) -> Option<DayRecord> {
    let removed = store.remove(date)?;
    if let Some(next) = store.next_date_after(date) {
        recompute_from(store, &next, params);
    }
    Some(removed)
}
