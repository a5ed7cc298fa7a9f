//! # demeter-store
//!
//! Date-ordered storage for the daily rainfall log.
//!
//! A [`RecordStore`] keeps one [`DayRecord`] per [`LogDate`] in a balanced
//! ordered map, so the chronological walk the moisture chain needs and the
//! "record just before this date" lookup are both cheap. Rows whose date
//! failed to parse keep their raw text as a [`LogDate::Invalid`] key and
//! sort before every valid day.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Record identity: valid calendar day or preserved raw text |
//! | `record` | One row of the day log |
//! | `store` | Ordered map of records with forward-walk access |
//! | `gaps` | Missing calendar days inside the recorded range |

mod date;
mod gaps;
mod record;
mod store;

pub use date::{DATE_FMT, LogDate};
pub use gaps::missing_dates;
pub use record::DayRecord;
pub use store::RecordStore;
