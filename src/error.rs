//! Error types for the seo-monitor crate

use thiserror::Error;

/// Result type for monitor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for monitor operations
///
/// Only configuration and output failures surface here. Per-site fetch
/// failures are recorded in the run report instead of aborting the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or validated
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error while writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Run log could not be opened
    #[error("Log error: {0}")]
    Log(#[from] tracing_appender::rolling::InitError),
}
