//! Read-only dashboard queries over the store.

use chrono::NaiveDate;

use demeter_store::RecordStore;

use crate::rainfall::record_rainfall;

/// Summary figures derived from the store for display.
///
/// The watering verdict reads the last record's stored moisture; it never
/// re-runs the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Most recent day with the watered flag set, if any.
    pub last_watered: Option<NaiveDate>,
    /// Most recent day with an observed rainfall above zero, if any.
    pub last_rain: Option<NaiveDate>,
    /// Stored moisture of the chronologically last record, or zero for an
    /// empty store.
    pub current_moisture: f64,
    /// `true` when the balance has reached the floor.
    pub watering_needed: bool,
}

impl Dashboard {
    /// Derives the dashboard from the store.
    ///
    /// Records with invalid dates contribute to the moisture figure (they
    /// are part of the chain) but never to the date metrics.
    pub fn derive(store: &RecordStore) -> Self {
        let mut last_watered = None;
        let mut last_rain = None;
        for record in store.iter() {
            let Some(day) = record.date.day() else {
                continue;
            };
            if record.watered {
                last_watered = Some(day);
            }
            if record_rainfall(record).is_wet() {
                last_rain = Some(day);
            }
        }

        let current_moisture = store.last().map_or(0.0, |rec| rec.moisture);
        Self {
            last_watered,
            last_rain,
            current_moisture,
            watering_needed: current_moisture <= 0.0,
        }
    }
}

/// Whole calendar days between a recorded day and "today".
///
/// The clock is the caller's: the core never reads it.
pub fn days_since(day: NaiveDate, today: NaiveDate) -> i64 {
    (today - day).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use demeter_store::{DayRecord, LogDate};

    fn entry(date: &str, rain: Option<f64>, watered: bool) -> DayRecord {
        DayRecord {
            date: LogDate::parse(date),
            rain_user: rain,
            rain_official: None,
            watered,
            notes: String::new(),
            moisture: 0.0,
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_store_needs_watering() {
        let dash = Dashboard::derive(&RecordStore::new());
        assert_eq!(dash.last_watered, None);
        assert_eq!(dash.last_rain, None);
        assert_eq!(dash.current_moisture, 0.0);
        assert!(dash.watering_needed);
    }

    #[test]
    fn latest_watered_and_rain_days_win() {
        let store: RecordStore = [
            entry("2024-05-01", Some(4.0), true),
            entry("2024-05-02", Some(2.0), false),
            entry("2024-05-03", Some(0.0), false),
        ]
        .into_iter()
        .collect();
        let dash = Dashboard::derive(&store);
        assert_eq!(dash.last_watered, Some(day("2024-05-01")));
        assert_eq!(dash.last_rain, Some(day("2024-05-02")));
    }

    #[test]
    fn zero_rain_is_not_rain() {
        let store: RecordStore = [entry("2024-05-01", Some(0.0), false)].into_iter().collect();
        assert_eq!(Dashboard::derive(&store).last_rain, None);
    }

    #[test]
    fn official_source_counts_as_rain() {
        let mut rec = entry("2024-05-01", None, false);
        rec.rain_official = Some(1.5);
        let store: RecordStore = [rec].into_iter().collect();
        assert_eq!(
            Dashboard::derive(&store).last_rain,
            Some(day("2024-05-01"))
        );
    }

    #[test]
    fn current_moisture_reads_the_last_record() {
        let mut wet = entry("2024-05-02", Some(3.0), false);
        wet.moisture = 3.0;
        let store: RecordStore = [entry("2024-05-01", Some(0.0), false), wet]
            .into_iter()
            .collect();
        let dash = Dashboard::derive(&store);
        assert_eq!(dash.current_moisture, 3.0);
        assert!(!dash.watering_needed);
    }

    #[test]
    fn floor_balance_triggers_the_verdict() {
        let store: RecordStore = [entry("2024-05-01", Some(0.0), false)].into_iter().collect();
        let dash = Dashboard::derive(&store);
        assert_eq!(dash.current_moisture, 0.0);
        assert!(dash.watering_needed);
    }

    #[test]
    fn invalid_dates_never_become_metrics() {
        let store: RecordStore = [entry("??", Some(9.0), true), entry("2024-05-01", None, false)]
            .into_iter()
            .collect();
        let dash = Dashboard::derive(&store);
        assert_eq!(dash.last_watered, None);
        assert_eq!(dash.last_rain, None);
    }

    #[test]
    fn days_since_counts_whole_days() {
        assert_eq!(days_since(day("2024-05-01"), day("2024-05-04")), 3);
        assert_eq!(days_since(day("2024-05-01"), day("2024-05-01")), 0);
    }
}
