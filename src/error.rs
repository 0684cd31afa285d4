//! Error types for the record hashing library.
//!
//! Only the table boundary and configuration validation can fail. The
//! normalization rules themselves are total and never return errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for hashing operations.
pub type HasherResult<T> = Result<T, HasherError>;

/// Error type for all table and pipeline operations.
#[derive(Debug, Error)]
pub enum HasherError {
    /// Error occurred while opening, reading or writing a file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV reader or writer rejected the data
    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Input table has no header row
    #[error("No header row found in '{}'", .path.display())]
    MissingHeader { path: PathBuf },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl HasherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
