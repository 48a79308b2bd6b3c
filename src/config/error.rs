//! Error types for the configuration module

use std::path::PathBuf;
use thiserror::Error;

/// Error type for configuration loading and validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("Configuration file {} not found", .0.display())]
    NotFound(PathBuf),

    /// Configuration file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Configuration is not valid JSON or has the wrong shape
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
