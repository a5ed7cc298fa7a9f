//! Ordered map of day records.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;

use crate::date::LogDate;
use crate::record::DayRecord;

/// The set of day records, keyed and ordered by [`LogDate`].
///
/// At most one record exists per date; inserting an existing date replaces
/// the record in place. Iteration order is always ascending date order,
/// with invalid-date records first.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<LogDate, DayRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record for a date, if present.
    pub fn get(&self, date: &LogDate) -> Option<&DayRecord> {
        self.records.get(date)
    }

    /// Returns `true` when a record exists for the date.
    pub fn contains(&self, date: &LogDate) -> bool {
        self.records.contains_key(date)
    }

    /// Inserts the record, replacing any existing record for the same date.
    ///
    /// Returns the replaced record when the date was already present.
    pub fn upsert(&mut self, record: DayRecord) -> Option<DayRecord> {
        self.records.insert(record.date.clone(), record)
    }

    /// Removes the record for a date.
    ///
    /// Removing an absent date is a no-op returning `None`.
    pub fn remove(&mut self, date: &LogDate) -> Option<DayRecord> {
        self.records.remove(date)
    }

    /// Iterates all records in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.records.values()
    }

    /// Iterates records at or after `start` in ascending date order,
    /// mutably. This is the recompute walk.
    pub fn iter_mut_from(&mut self, start: &LogDate) -> impl Iterator<Item = &mut DayRecord> {
        self.records
            .range_mut((Bound::Included(start), Bound::Unbounded))
            .map(|(_, rec)| rec)
    }

    /// Returns the record immediately preceding `date`, if any.
    pub fn prev_record(&self, date: &LogDate) -> Option<&DayRecord> {
        self.records
            .range((Bound::Unbounded, Bound::Excluded(date)))
            .next_back()
            .map(|(_, rec)| rec)
    }

    /// Returns the first record date strictly after `date`, if any.
    pub fn next_date_after(&self, date: &LogDate) -> Option<LogDate> {
        self.records
            .range((Bound::Excluded(date), Bound::Unbounded))
            .next()
            .map(|(key, _)| key.clone())
    }

    /// Returns the chronologically first record.
    pub fn first(&self) -> Option<&DayRecord> {
        self.records.values().next()
    }

    /// Returns the chronologically last record.
    pub fn last(&self) -> Option<&DayRecord> {
        self.records.values().next_back()
    }

    /// Iterates the calendar days of all valid-date records, ascending.
    ///
    /// Invalid-date records are skipped; they have no place on the calendar.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.keys().filter_map(LogDate::day)
    }
}

impl FromIterator<DayRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = DayRecord>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for record in iter {
            store.upsert(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str) -> DayRecord {
        DayRecord::new(LogDate::parse(date))
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut store = RecordStore::new();
        let mut first = rec("2024-05-01");
        first.notes = "first".to_string();
        let mut second = rec("2024-05-01");
        second.notes = "second".to_string();

        assert!(store.upsert(first).is_none());
        let replaced = store.upsert(second).unwrap();
        assert_eq!(replaced.notes, "first");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&LogDate::parse("2024-05-01")).unwrap().notes,
            "second"
        );
    }

    #[test]
    fn iteration_is_date_ordered() {
        let store: RecordStore = [rec("2024-05-03"), rec("2024-05-01"), rec("2024-05-02")]
            .into_iter()
            .collect();
        let dates: Vec<String> = store.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["2024-05-01", "2024-05-02", "2024-05-03"]);
    }

    #[test]
    fn invalid_dates_sort_first() {
        let store: RecordStore = [rec("2024-05-01"), rec("not-a-date")].into_iter().collect();
        assert_eq!(store.first().unwrap().date.to_string(), "not-a-date");
        assert_eq!(store.last().unwrap().date.to_string(), "2024-05-01");
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store: RecordStore = [rec("2024-05-01")].into_iter().collect();
        assert!(store.remove(&LogDate::parse("2024-05-02")).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn prev_record_skips_gap() {
        let store: RecordStore = [rec("2024-05-01"), rec("2024-05-04")].into_iter().collect();
        let prev = store.prev_record(&LogDate::parse("2024-05-04")).unwrap();
        assert_eq!(prev.date.to_string(), "2024-05-01");
        assert!(store.prev_record(&LogDate::parse("2024-05-01")).is_none());
    }

    #[test]
    fn next_date_after_skips_self() {
        let store: RecordStore = [rec("2024-05-01"), rec("2024-05-04")].into_iter().collect();
        assert_eq!(
            store.next_date_after(&LogDate::parse("2024-05-01")),
            Some(LogDate::parse("2024-05-04"))
        );
        assert_eq!(store.next_date_after(&LogDate::parse("2024-05-04")), None);
    }

    #[test]
    fn next_date_after_works_for_removed_date() {
        // The post-deletion recompute asks for the successor of a date that
        // is no longer in the store.
        let mut store: RecordStore = [rec("2024-05-01"), rec("2024-05-02"), rec("2024-05-03")]
            .into_iter()
            .collect();
        store.remove(&LogDate::parse("2024-05-02"));
        assert_eq!(
            store.next_date_after(&LogDate::parse("2024-05-02")),
            Some(LogDate::parse("2024-05-03"))
        );
    }

    #[test]
    fn iter_mut_from_covers_tail() {
        let mut store: RecordStore = [rec("2024-05-01"), rec("2024-05-02"), rec("2024-05-03")]
            .into_iter()
            .collect();
        for record in store.iter_mut_from(&LogDate::parse("2024-05-02")) {
            record.moisture = 1.0;
        }
        let moistures: Vec<f64> = store.iter().map(|r| r.moisture).collect();
        assert_eq!(moistures, [0.0, 1.0, 1.0]);
    }

    #[test]
    fn days_skips_invalid() {
        let store: RecordStore = [rec("??"), rec("2024-05-01"), rec("2024-05-03")]
            .into_iter()
            .collect();
        let days: Vec<NaiveDate> = store.days().collect();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].to_string(), "2024-05-01");
    }
}
