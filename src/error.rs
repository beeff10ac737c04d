//! Unified error types for near-dedup.
//!
//! Two classes of fatal error exist: bad configuration (surfaced before any
//! input IO) and IO failures with path context. Malformed input rows are not
//! errors; they are logged and skipped by the loader. Logic invariant
//! violations (e.g. a Union-Find lookup on an element that was never added)
//! are bugs and panic.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for near-dedup operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DedupError {
    /// Invalid or inconsistent configuration (out-of-range parameters,
    /// signature geometry where `num_hashes != num_bands * rows_per_band`,
    /// zero capacities).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenient Result type for near-dedup operations
pub type Result<T> = std::result::Result<T, DedupError>;

impl DedupError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for DedupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}
