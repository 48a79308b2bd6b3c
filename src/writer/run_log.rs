//! Append-only event log for monitoring runs

use chrono::{DateTime, Local};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::Result;
use crate::report::SiteReport;

/// File name of the run log inside the output directory
pub const LOG_FILE_NAME: &str = "seo_monitor.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Line-oriented run log
///
/// One instance is opened per run. Lines are appended to
/// `<dir>/seo_monitor.log`, so earlier runs stay in the file.
pub struct RunLog {
    appender: RollingFileAppender,
    path: PathBuf,
}

impl RunLog {
    /// Open (or create) the log in `dir`
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(dir)?;

        Ok(Self {
            appender,
            path: dir.join(LOG_FILE_NAME),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an informational line stamped with the current time
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.write_line(Local::now(), Level::Info, message)
    }

    /// Append an error line stamped with the current time
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.write_line(Local::now(), Level::Error, message)
    }

    /// Append the outcome of one site, stamped with its check time
    pub fn record_site(&mut self, site: &SiteReport) -> Result<()> {
        match (site.failure_reason(), site.fetch_time_ms) {
            (Some(reason), _) => self.write_line(
                site.checked_at,
                Level::Error,
                &format!("{} failed: {}", site.url, reason),
            ),
            (None, time_ms) => {
                let found = site.findings.iter().filter(|f| f.found).count();
                self.write_line(
                    site.checked_at,
                    Level::Info,
                    &format!(
                        "{} ok in {}ms, {}/{} keywords found",
                        site.url,
                        time_ms.unwrap_or_default(),
                        found,
                        site.keywords.len()
                    ),
                )
            }
        }
    }

    fn write_line(&mut self, at: DateTime<Local>, level: Level, message: &str) -> Result<()> {
        writeln!(
            self.appender,
            "{} - {} - {}",
            at.format(TIMESTAMP_FORMAT),
            level.as_str(),
            message
        )?;
        self.appender.flush()?;
        Ok(())
    }
}
