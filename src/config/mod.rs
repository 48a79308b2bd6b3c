//! # Configuration Module
//!
//! Loads the JSON file describing which sites to check for which keywords and
//! validates it into a typed [`MonitorConfig`]. Nothing downstream ever looks
//! at raw JSON.
//!
//! Two input shapes are accepted and may be combined:
//!
//! - `"sites": { "<url>": ["keyword", ...] }` assigns keywords per site
//! - `"websites": [...]` + `"keywords": [...]` checks every site for every keyword
//!
//! Site order in the file is the order of the report.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{DEFAULT_USER_AGENT, Settings, SettingsBuilder};

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use url::Url;

use crate::extractor::tokenize;

/// A website and the keywords to look for on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// URL of the page to fetch, as written in the configuration
    pub url: String,

    /// Keywords in configured order
    pub keywords: Vec<String>,
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Targets in configured order
    pub targets: Vec<Target>,

    /// Run settings
    pub settings: Settings,
}

/// On-disk shape before validation
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    sites: serde_json::Map<String, serde_json::Value>,

    #[serde(default)]
    websites: Vec<String>,

    #[serde(default)]
    keywords: Vec<String>,

    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    output_dir: Option<PathBuf>,
    concurrency: Option<usize>,
    requests_per_minute: Option<u32>,
    write_json: Option<bool>,
    check_interval: Option<u64>,
}

impl MonitorConfig {
    /// Read and validate a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        raw.validate()
    }
}

impl RawConfig {
    fn validate(self) -> Result<MonitorConfig, ConfigError> {
        if self.check_interval.is_some() {
            warn!("check_interval is ignored; each invocation performs a single run");
        }

        let mut targets: Vec<Target> = Vec::new();

        for (url, value) in self.sites {
            let keywords: Vec<String> = serde_json::from_value(value).map_err(|_| {
                ConfigError::Invalid(format!("keywords for {} must be a list of strings", url))
            })?;
            add_target(&mut targets, url, keywords)?;
        }

        if !self.websites.is_empty() && self.keywords.is_empty() {
            return Err(ConfigError::Invalid(
                "\"websites\" requires a non-empty \"keywords\" list".to_string(),
            ));
        }
        for url in self.websites {
            add_target(&mut targets, url, self.keywords.clone())?;
        }

        if targets.is_empty() {
            return Err(ConfigError::Invalid("no websites configured".to_string()));
        }

        let defaults = Settings::default();
        let settings = Settings {
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            concurrency: self.concurrency.unwrap_or(defaults.concurrency),
            requests_per_minute: self.requests_per_minute,
            write_json: self.write_json.unwrap_or(defaults.write_json),
        };
        settings.validate()?;

        Ok(MonitorConfig { targets, settings })
    }
}

/// Validate one site and merge it into the target list
///
/// A URL listed twice keeps its first position; keywords not seen before are
/// appended to it.
fn add_target(
    targets: &mut Vec<Target>,
    url: String,
    keywords: Vec<String>,
) -> Result<(), ConfigError> {
    let url = url.trim().to_string();
    let parsed =
        Url::parse(&url).map_err(|e| ConfigError::Invalid(format!("invalid URL '{}': {}", url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "unsupported URL scheme '{}' for {}",
            parsed.scheme(),
            url
        )));
    }
    if keywords.is_empty() {
        return Err(ConfigError::Invalid(format!("no keywords configured for {}", url)));
    }
    for keyword in &keywords {
        if tokenize(keyword).is_empty() {
            return Err(ConfigError::Invalid(format!(
                "keyword '{}' for {} contains no words",
                keyword, url
            )));
        }
    }

    match targets.iter_mut().find(|t| t.url == url) {
        Some(existing) => {
            for keyword in keywords {
                if !existing.keywords.contains(&keyword) {
                    existing.keywords.push(keyword);
                }
            }
        }
        None => targets.push(Target { url, keywords }),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sites_mapping_preserves_order() {
        let config = MonitorConfig::from_json_str(
            r#"{
                "sites": {
                    "https://zeta.example": ["rust"],
                    "https://alpha.example": ["seo", "Meta Tags"]
                }
            }"#,
        )
        .unwrap();

        let urls: Vec<&str> = config.targets.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, vec!["https://zeta.example", "https://alpha.example"]);
        assert_eq!(config.targets[1].keywords, vec!["seo", "Meta Tags"]);
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn test_websites_and_keywords_shape() {
        let config = MonitorConfig::from_json_str(
            r#"{
                "websites": ["https://a.example", "https://b.example"],
                "keywords": ["seo", "audit"],
                "check_interval": 3600,
                "timeout_secs": 10,
                "output_dir": "out"
            }"#,
        )
        .unwrap();

        assert_eq!(config.targets.len(), 2);
        for target in &config.targets {
            assert_eq!(target.keywords, vec!["seo", "audit"]);
        }
        assert_eq!(config.settings.timeout_secs, 10);
        assert_eq!(config.settings.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_duplicate_urls_are_merged() {
        let config = MonitorConfig::from_json_str(
            r#"{
                "sites": { "https://a.example": ["seo"] },
                "websites": ["https://b.example", "https://a.example"],
                "keywords": ["seo", "speed"]
            }"#,
        )
        .unwrap();

        assert_eq!(config.targets.len(), 2);
        assert_eq!(config.targets[0].url, "https://a.example");
        assert_eq!(config.targets[0].keywords, vec!["seo", "speed"]);
        assert_eq!(config.targets[1].url, "https://b.example");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = MonitorConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let cases = [
            r#"{}"#,
            r#"{"sites": {"not a url": ["seo"]}}"#,
            r#"{"sites": {"ftp://a.example": ["seo"]}}"#,
            r#"{"sites": {"https://a.example": []}}"#,
            r#"{"sites": {"https://a.example": ["  --  "]}}"#,
            r#"{"sites": {"https://a.example": "seo"}}"#,
            r#"{"websites": ["https://a.example"]}"#,
            r#"{"sites": {"https://a.example": ["seo"]}, "concurrency": 0}"#,
        ];

        for case in cases {
            let result = MonitorConfig::from_json_str(case);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "expected Invalid for {}, got {:?}",
                case,
                result
            );
        }
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match MonitorConfig::load(&path).await {
            Err(ConfigError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{"sites": {"https://a.example/": ["seo"]}}"#)
            .await
            .unwrap();

        let config = MonitorConfig::load(&path).await.unwrap();
        assert_eq!(config.targets[0].url, "https://a.example/");
    }
}
