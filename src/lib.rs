//! # SEO Monitor - Keyword and Meta Tag Checks for Websites
//!
//! This crate fetches a configured list of web pages, checks where given
//! keywords appear in the visible text, extracts basic on-page SEO signals
//! and writes the results of each run to disk.
//!
//! ## Features
//!
//! - JSON configuration mapping each site to its keywords
//! - HTTP fetching with timeouts, a browser User-Agent and optional rate limiting
//! - Keyword position, occurrence and density analysis
//! - Title, description, heading and image alt-text extraction
//! - Run output:
//!   - CSV results with one row per site and keyword
//!   - Human-readable text summary
//!   - Optional JSON report
//!   - Appended run log
//! - Async API with Tokio
//!
//! ## Example
//!
//! ```rust,no_run
//! use seo_monitor::config::MonitorConfig;
//! use seo_monitor::fetcher::HttpFetcher;
//! use seo_monitor::pipeline::run_monitor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MonitorConfig::load("config.json").await?;
//!     let fetcher = HttpFetcher::new(&config.settings)?;
//!
//!     let (report, files) = run_monitor(&config, &fetcher, |_| {}).await?;
//!
//!     println!(
//!         "{} sites checked, results in {}",
//!         report.sites().len(),
//!         files.csv.display()
//!     );
//!     Ok(())
//! }
//! ```

mod error;

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod report;
pub mod writer;

pub use error::{Error, Result};

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::config::{MonitorConfig, Settings, Target};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::fetcher::{HttpFetcher, PageFetcher, RateLimitedFetcher};
    pub use crate::report::{RunReport, SiteReport};
}
