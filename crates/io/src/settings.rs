//! The settings store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use demeter_engine::{DEFAULT_PERIOD_DAYS, DEFAULT_THRESHOLD_MM, EngineError, MoistureParams};

use crate::error::IoError;

/// Process-wide settings, persisted as a small JSON file.
///
/// Loading never fails: a missing or unreadable file yields the built-in
/// defaults, a parseable file overlays only the keys it carries onto the
/// defaults, and unknown keys are ignored. Out-of-range numeric values are
/// pulled back to their defaults so a loaded `Settings` always converts to
/// valid moisture parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Path of the CSV day log.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Full-moisture capacity in millimetres.
    #[serde(default = "default_threshold")]
    pub threshold_mm: f64,

    /// Days for the balance to decay from full to zero.
    #[serde(default = "default_period")]
    pub period_days: u32,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("rain_data.csv")
}
fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD_MM
}
fn default_period() -> u32 {
    DEFAULT_PERIOD_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            threshold_mm: default_threshold(),
            period_days: default_period(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                debug!(path = %path.display(), reason = %e, "no settings file, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!(path = %path.display(), reason = %e, "settings file unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Pulls out-of-range values back to their defaults.
    fn sanitized(mut self) -> Self {
        if !self.threshold_mm.is_finite() || self.threshold_mm <= 0.0 {
            warn!(
                threshold_mm = self.threshold_mm,
                "threshold out of range, using default"
            );
            self.threshold_mm = default_threshold();
        }
        if self.period_days == 0 {
            warn!("zero decay period, using default");
            self.period_days = default_period();
        }
        self
    }

    /// Writes the settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Write`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| IoError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        fs::write(path, json).map_err(|e| IoError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Converts to validated moisture parameters.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the current values are out of range
    /// (possible after an in-memory edit; loaded settings are always
    /// valid).
    pub fn params(&self) -> Result<MoistureParams, EngineError> {
        MoistureParams::new(self.threshold_mm, self.period_days)
    }
}
