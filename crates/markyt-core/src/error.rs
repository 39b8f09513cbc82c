//! Error types for the Markyt workspace.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for Markyt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the boundaries of the Markyt workspace.
///
/// The personalization and slug engines themselves never fail (their
/// failure mode is always a best-effort string); errors exist only where
/// the toolkit touches files and configuration.
///
/// All error variants are marked `#[non_exhaustive]` to allow adding new
/// error types without breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Input could not be parsed (lead records, sequence files).
    #[error("Parse error: {message}")]
    Parse {
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error carrying the path that failed.
    #[error("I/O error at {}: {source}", .path.display())]
    IoAt {
        /// The underlying I/O error
        source: std::io::Error,
        /// Path of the file or directory involved
        path: PathBuf,
    },

    /// I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error annotated with the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoAt {
            source,
            path: path.as_ref().to_path_buf(),
        }
    }
}
