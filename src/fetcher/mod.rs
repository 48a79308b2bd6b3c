//! # Fetcher Module
//!
//! Retrieves the raw HTML of a target page. One attempt per run, no retries.
//!
//! ## Key Components
//!
//! - `PageFetcher`: the seam between the pipeline and the network
//! - `HttpFetcher`: reqwest-backed implementation with timeout and User-Agent
//! - `RateLimitedFetcher`: wraps any fetcher to pace outgoing requests
//! - `FetchError`: timeout, connection, HTTP status and other failures

mod error;
mod http;
mod ratelimited;

pub use error::FetchError;
pub use http::HttpFetcher;
pub use ratelimited::RateLimitedFetcher;

use serde::{Deserialize, Serialize};
use std::future::Future;

/// A successfully retrieved page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// Response body as text
    pub html: String,

    /// Time from sending the request until the body was read
    pub elapsed_ms: u64,

    /// HTTP status code
    pub status: u16,

    /// Body size in bytes
    pub content_length: usize,
}

/// Outcome of fetching one page
pub type FetchResult = Result<FetchedPage, FetchError>;

/// Retrieves pages by URL
pub trait PageFetcher {
    /// Fetch a single page
    fn fetch(&self, url: &str) -> impl Future<Output = FetchResult> + Send;
}
