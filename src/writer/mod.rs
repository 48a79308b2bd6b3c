//! # Report Writer
//!
//! Persists a finished [`RunReport`] into the output directory:
//!
//! - `seo_results_<timestamp>.csv`: one row per (site, keyword)
//! - `seo_report_<timestamp>.txt`: human-readable summary
//! - `seo_report_<timestamp>.json`: full report, when enabled
//! - `seo_monitor.log`: one appended line per site plus run start/end
//!
//! Any write failure ends the run with an error. Files written before the
//! failure are left in place.

mod csv_report;
mod run_log;
mod text_report;

pub use csv_report::{NOT_FOUND_POSITION, render_csv};
pub use run_log::{LOG_FILE_NAME, RunLog};
pub use text_report::render_text_report;

use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

use crate::error::Result;
use crate::report::RunReport;

/// Paths of the files produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// CSV results
    pub csv: PathBuf,

    /// Text summary
    pub text: PathBuf,

    /// JSON report, if written
    pub json: Option<PathBuf>,

    /// Run log
    pub log: PathBuf,
}

/// Writes run output into one directory
pub struct ReportWriter {
    output_dir: PathBuf,
    write_json: bool,
    log: RunLog,
}

impl ReportWriter {
    /// Create the output directory and open the run log
    pub fn new(output_dir: impl Into<PathBuf>, write_json: bool) -> Result<Self> {
        let output_dir = output_dir.into();
        let log = RunLog::open(&output_dir)?;
        Ok(Self {
            output_dir,
            write_json,
            log,
        })
    }

    /// The run log, for events outside of report writing
    pub fn log(&mut self) -> &mut RunLog {
        &mut self.log
    }

    /// Write every output file for `report`
    #[instrument(skip(self, report), fields(sites = report.sites().len()))]
    pub async fn write(&mut self, report: &RunReport) -> Result<WrittenFiles> {
        match self.write_files(report).await {
            Ok(files) => {
                self.log.info(&format!(
                    "Monitoring cycle completed: {} ok, {} failed",
                    report.success_count(),
                    report.failure_count()
                ))?;
                Ok(files)
            }
            Err(e) => {
                // Best effort, the write error is what gets reported
                let _ = self.log.error(&format!("Failed to write results: {}", e));
                Err(e)
            }
        }
    }

    async fn write_files(&mut self, report: &RunReport) -> Result<WrittenFiles> {
        let run_id = report.run_id();

        for site in report.sites() {
            self.log.record_site(site)?;
        }

        let csv = self.output_dir.join(format!("seo_results_{}.csv", run_id));
        fs::write(&csv, render_csv(report)?).await?;
        info!("Wrote {} rows to {}", report.keyword_row_count(), csv.display());

        let text = self.output_dir.join(format!("seo_report_{}.txt", run_id));
        fs::write(&text, render_text_report(report)).await?;
        info!("Wrote summary to {}", text.display());

        let json = if self.write_json {
            let path = self.output_dir.join(format!("seo_report_{}.json", run_id));
            fs::write(&path, serde_json::to_string_pretty(report)?).await?;
            info!("Wrote JSON report to {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(WrittenFiles {
            csv,
            text,
            json,
            log: self.log.path().to_path_buf(),
        })
    }
}
