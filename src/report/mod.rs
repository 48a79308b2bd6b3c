//! # Run Report
//!
//! In-memory results of one monitoring run. A [`SiteReport`] is built from a
//! target and its fetch outcome and then appended to the [`RunReport`], which
//! keeps sites in the order they were configured. Nothing here performs I/O.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::config::Target;
use crate::extractor::{KeywordFinding, PageAnalysis, analyze_page};
use crate::fetcher::FetchResult;

/// Timestamp format used in output file names
pub const RUN_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Outcome of checking one site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SiteStatus {
    /// Page fetched and analyzed
    Ok {
        /// HTTP status code
        http_status: u16,
        /// Body size in bytes
        content_length: usize,
    },

    /// Page could not be fetched
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

/// Results for one configured site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    /// Site URL as configured
    pub url: String,

    /// Configured keywords, in order
    pub keywords: Vec<String>,

    /// When the check finished
    pub checked_at: DateTime<Local>,

    /// Fetch outcome
    #[serde(flatten)]
    pub status: SiteStatus,

    /// Fetch duration; absent when the fetch failed
    pub fetch_time_ms: Option<u64>,

    /// Meta tags and structure counts; empty when the fetch failed
    pub analysis: PageAnalysis,

    /// One finding per keyword; empty when the fetch failed
    pub findings: Vec<KeywordFinding>,
}

impl SiteReport {
    /// Build a report from a target and its fetch outcome
    ///
    /// Successful fetches are analyzed here. A failed fetch produces a report
    /// marked as failed with no findings.
    pub fn from_fetch(target: &Target, result: FetchResult) -> Self {
        let (status, fetch_time_ms, analysis, findings) = match result {
            Ok(page) => {
                let extraction = analyze_page(&page.html, &target.keywords);
                (
                    SiteStatus::Ok {
                        http_status: page.status,
                        content_length: page.content_length,
                    },
                    Some(page.elapsed_ms),
                    extraction.analysis,
                    extraction.findings,
                )
            }
            Err(e) => {
                debug!("Fetch failed for {}: {}", target.url, e);
                (
                    SiteStatus::Failed {
                        reason: e.to_string(),
                    },
                    None,
                    PageAnalysis::default(),
                    Vec::new(),
                )
            }
        };

        Self {
            url: target.url.clone(),
            keywords: target.keywords.clone(),
            checked_at: Local::now(),
            status,
            fetch_time_ms,
            analysis,
            findings,
        }
    }

    /// Whether the page was fetched
    pub fn is_success(&self) -> bool {
        matches!(self.status, SiteStatus::Ok { .. })
    }

    /// Failure reason, if the fetch failed
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            SiteStatus::Failed { reason } => Some(reason),
            SiteStatus::Ok { .. } => None,
        }
    }

    /// Each configured keyword with its finding
    ///
    /// Failed sites yield a not-found finding for every keyword, so callers
    /// always see exactly one entry per configured keyword.
    pub fn keyword_results(&self) -> impl Iterator<Item = KeywordFinding> + '_ {
        self.keywords.iter().enumerate().map(move |(i, keyword)| {
            self.findings
                .get(i)
                .filter(|finding| finding.keyword == *keyword)
                .cloned()
                .unwrap_or_else(|| KeywordFinding::not_found(keyword.as_str()))
        })
    }
}

/// All site reports of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    started_at: DateTime<Local>,
    sites: Vec<SiteReport>,
}

impl RunReport {
    /// Start an empty report
    pub fn new(started_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            sites: Vec::new(),
        }
    }

    /// Append a finished site report
    pub fn push(&mut self, site: SiteReport) {
        self.sites.push(site);
    }

    /// Run timestamp used in output file names
    pub fn run_id(&self) -> String {
        self.started_at.format(RUN_ID_FORMAT).to_string()
    }

    /// Site reports in configured order
    pub fn sites(&self) -> &[SiteReport] {
        &self.sites
    }

    /// Number of sites fetched successfully
    pub fn success_count(&self) -> usize {
        self.sites.iter().filter(|s| s.is_success()).count()
    }

    /// Number of sites that failed to fetch
    pub fn failure_count(&self) -> usize {
        self.sites.len() - self.success_count()
    }

    /// Number of (site, keyword) pairs
    pub fn keyword_row_count(&self) -> usize {
        self.sites.iter().map(|s| s.keywords.len()).sum()
    }
}
