//! # Run Settings
//!
//! Knobs that shape a single monitoring run: request timeout, the User-Agent
//! sent to every site, where output lands, and how many sites may be in flight
//! at once. A builder is provided for callers that assemble settings in code.

use std::path::PathBuf;
use std::time::Duration;

use super::ConfigError;

/// Desktop browser User-Agent sent by default
///
/// Several sites serve stripped-down markup to unknown agents, so the default
/// identifies as a regular Chrome build.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for one monitoring run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent to use for requests
    pub user_agent: String,

    /// Directory receiving the CSV, text report, JSON report and run log
    pub output_dir: PathBuf,

    /// Maximum number of sites fetched at the same time
    pub concurrency: usize,

    /// Optional cap on outgoing requests per minute
    pub requests_per_minute: Option<u32>,

    /// Whether to also write the JSON report
    pub write_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("results"),
            concurrency: 1,
            requests_per_minute: None,
            write_json: false,
        }
    }
}

/// Builder for Settings
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.settings.timeout_secs = timeout_secs;
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = user_agent.into();
        self
    }

    /// Set the output directory
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.settings.output_dir = output_dir.into();
        self
    }

    /// Set how many sites may be fetched at once
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.settings.concurrency = concurrency;
        self
    }

    /// Limit outgoing requests per minute
    pub fn requests_per_minute(mut self, requests_per_minute: u32) -> Self {
        self.settings.requests_per_minute = Some(requests_per_minute);
        self
    }

    /// Enable or disable the JSON report
    pub fn write_json(mut self, write_json: bool) -> Self {
        self.settings.write_json = write_json;
        self
    }

    /// Build the settings
    pub fn build(self) -> Settings {
        self.settings
    }
}

impl Settings {
    /// Create a new builder
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be at least 1".to_string(),
            ));
        }
        if self.requests_per_minute == Some(0) {
            return Err(ConfigError::Invalid(
                "requests_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".to_string()));
        }
        Ok(())
    }
}
