//! Error types for markyt-cli

use thiserror::Error;

/// Result type alias for markyt-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in markyt-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from markyt-core
    #[error("Core error: {0}")]
    Core(#[from] markyt_core::Error),

    /// Error reading a lead batch file
    #[error("Lead batch error: {0}")]
    Csv(#[from] csv::Error),

    /// Error producing JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command-line input that cannot be acted on
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Creates an invalid-input error from any string-like message.
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}
