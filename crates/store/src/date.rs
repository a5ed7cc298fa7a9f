//! Record identity: a parsed calendar day or the raw text that refused to be one.

use std::fmt;

use chrono::NaiveDate;

/// Storage format for dates in the day log.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Identity of a day-log record.
///
/// A row whose `Date` field parses as ISO `YYYY-MM-DD` becomes
/// [`LogDate::Day`]; anything else is kept verbatim as
/// [`LogDate::Invalid`] so the row survives a load/save round trip.
///
/// The derived ordering places every `Invalid` before every `Day`
/// (an unparseable date is treated as the minimum possible date), and
/// orders `Invalid` values among themselves by their raw text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogDate {
    /// Raw `Date` text that did not parse. Sorts before all valid days.
    Invalid(String),
    /// A valid calendar day.
    Day(NaiveDate),
}

impl LogDate {
    /// Parses a raw `Date` field.
    ///
    /// The input is trimmed and matched against [`DATE_FMT`]. Text that
    /// does not parse is preserved as [`LogDate::Invalid`]; this function
    /// never fails.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match NaiveDate::parse_from_str(trimmed, DATE_FMT) {
            Ok(day) => LogDate::Day(day),
            Err(_) => LogDate::Invalid(trimmed.to_string()),
        }
    }

    /// Returns the calendar day, or `None` for an invalid date.
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            LogDate::Day(day) => Some(*day),
            LogDate::Invalid(_) => None,
        }
    }

    /// Returns `true` when this is a valid calendar day.
    pub fn is_day(&self) -> bool {
        matches!(self, LogDate::Day(_))
    }
}

impl From<NaiveDate> for LogDate {
    fn from(day: NaiveDate) -> Self {
        LogDate::Day(day)
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDate::Day(day) => write!(f, "{}", day.format(DATE_FMT)),
            LogDate::Invalid(raw) => f.write_str(raw),
        }
    }
}
