//! # demeter-engine
//!
//! The soil-moisture accounting engine behind the rainfall log.
//!
//! Each day's moisture balance depends only on the previous day's balance
//! plus that day's own inputs:
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   rainfall    │────▶│ daily_moisture │────▶│   recompute      │
//!  │  (resolve)    │     │ (decay + cap)  │     │ (forward fold)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! Editing any historical day invalidates every later day, so the
//! coordinator ([`recompute_from`]) always folds from the edit point to
//! the end of the store. Watering is a hard reset to the threshold; rain adds
//! on top of a fixed daily decay; the balance is clamped to
//! `[0, threshold]`.
//!
//! # Quick start
//!
//! ```rust
//! use demeter_engine::{MoistureParams, Rainfall, daily_moisture};
//!
//! let params = MoistureParams::new(10.0, 7).unwrap();
//! let day1 = daily_moisture(0.0, Rainfall::Valid(5.0), false, &params);
//! let day2 = daily_moisture(day1, Rainfall::Valid(0.0), false, &params);
//! assert!(day2 < day1);
//! ```

mod error;
mod metrics;
mod moisture;
mod params;
mod rainfall;
mod recompute;

pub use error::EngineError;
pub use metrics::{Dashboard, days_since};
pub use moisture::daily_moisture;
pub use params::{DEFAULT_PERIOD_DAYS, DEFAULT_THRESHOLD_MM, MoistureParams};
pub use rainfall::{Rainfall, effective_rainfall, parse_mm, record_rainfall};
pub use recompute::{delete_record, recompute_all, recompute_from, upsert_record};
