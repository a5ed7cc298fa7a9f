//! Moisture model parameters.

use crate::error::EngineError;

/// Default full-moisture capacity in millimetres.
pub const DEFAULT_THRESHOLD_MM: f64 = 10.0;

/// Default number of days for the balance to decay from full to zero.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

/// Validated moisture-model parameters.
///
/// `threshold_mm` is the full-moisture capacity; `period_days` is how many
/// rain-free days it takes the balance to fall from full to zero. The
/// daily decay is derived, never stored. A parameter change invalidates
/// every stored moisture value, so callers must follow it with a
/// from-the-beginning recompute (see [`crate::recompute_all`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistureParams {
    threshold_mm: f64,
    period_days: u32,
}

impl MoistureParams {
    /// Creates parameters after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidThreshold`] unless `threshold_mm` is
    /// positive and finite, and [`EngineError::InvalidPeriod`] when
    /// `period_days` is zero.
    pub fn new(threshold_mm: f64, period_days: u32) -> Result<Self, EngineError> {
        if !threshold_mm.is_finite() || threshold_mm <= 0.0 {
            return Err(EngineError::InvalidThreshold {
                value: threshold_mm,
            });
        }
        if period_days == 0 {
            return Err(EngineError::InvalidPeriod { days: period_days });
        }
        Ok(Self {
            threshold_mm,
            period_days,
        })
    }

    /// Returns the full-moisture capacity in millimetres.
    pub fn threshold_mm(self) -> f64 {
        self.threshold_mm
    }

    /// Returns the decay period in days.
    pub fn period_days(self) -> u32 {
        self.period_days
    }

    /// Millimetres of moisture lost per rain-free day.
    ///
    /// With `period_days = 1` the decay equals the threshold: the balance
    /// dries out fully within one day. That is valid, not an error.
    pub fn decay_per_day(self) -> f64 {
        self.threshold_mm / f64::from(self.period_days)
    }
}

impl Default for MoistureParams {
    fn default() -> Self {
        Self {
            threshold_mm: DEFAULT_THRESHOLD_MM,
            period_days: DEFAULT_PERIOD_DAYS,
        }
    }
}
