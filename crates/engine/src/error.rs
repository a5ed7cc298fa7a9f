//! Error types for the demeter-engine crate.

/// Error type for parameter validation in the moisture engine.
///
/// The engine itself never fails: rainfall resolution and the recompute
/// fold degrade malformed inputs to safe defaults. Only constructing
/// [`crate::MoistureParams`] from out-of-range settings is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when the moisture threshold is not a positive finite number.
    #[error("invalid threshold: {value} mm (must be positive and finite)")]
    InvalidThreshold {
        /// The rejected threshold value.
        value: f64,
    },

    /// Returned when the decay period is zero days.
    #[error("invalid decay period: {days} days (must be at least 1)")]
    InvalidPeriod {
        /// The rejected period length.
        days: u32,
    },
}
