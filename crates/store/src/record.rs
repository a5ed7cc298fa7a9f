//! One row of the day log.

use crate::date::LogDate;

/// A single day's entry: rainfall observations, the watering flag, and the
/// derived moisture balance.
///
/// Rainfall fields hold `None` when the source field was blank,
/// unparseable, or negative; the distinction between "no data" and
/// "zero rain" is resolved downstream from the two raw fields together.
/// `moisture` is owned by the recompute pass and is overwritten every time
/// the chain is re-derived past this record.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    /// Record identity; unique within a store.
    pub date: LogDate,
    /// User-entered rainfall in millimetres.
    pub rain_user: Option<f64>,
    /// Rainfall from the official (bureau) source, in millimetres.
    pub rain_official: Option<f64>,
    /// Whether the lawn was watered this day.
    pub watered: bool,
    /// Free-text note. No effect on the moisture balance.
    pub notes: String,
    /// Derived soil-moisture balance in millimetres.
    pub moisture: f64,
}

impl DayRecord {
    /// Creates an empty record for the given date.
    pub fn new(date: LogDate) -> Self {
        Self {
            date,
            rain_user: None,
            rain_official: None,
            watered: false,
            notes: String::new(),
            moisture: 0.0,
        }
    }
}
