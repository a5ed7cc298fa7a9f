//! Error types for demeter-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the demeter-io crate.
///
/// Field-level problems never surface here; they degrade to absent values
/// at the parse boundary. What remains is the file itself failing to be
/// read or written.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the CSV layer.
    #[error("csv error in {}: {reason}", path.display())]
    Csv {
        /// Path of the log being processed.
        path: PathBuf,
        /// Description of the underlying CSV failure.
        reason: String,
    },
}
