//! Error types for the fetcher module

use std::time::Duration;
use thiserror::Error;

/// Why a page could not be retrieved
///
/// Fetch errors never abort a run. They are stored on the site's report, so
/// the variants carry plain data rather than the client's error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No complete response within the configured timeout
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// Could not connect (DNS failure, refused connection, TLS failure)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Server answered with a non-success status
    #[error("HTTP error: status {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Any other client-side failure
    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a reqwest error
    ///
    /// Timeouts are checked first because a connect timeout reports both
    /// `is_timeout` and `is_connect`.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            FetchError::Request(err.to_string())
        }
    }
}
