//! # Monitoring Pipeline
//!
//! Drives one run: every target is fetched and analyzed, the results are
//! folded into a [`RunReport`] in configured order, and the report is handed
//! to the [`ReportWriter`].
//!
//! With `concurrency = 1` sites are processed strictly one after another.
//! Higher values let several fetches overlap, but results are still consumed
//! in configured order, so the report is identical either way.

use chrono::Local;
use futures::{StreamExt, stream};
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::config::{ConfigError, MonitorConfig, Settings, Target};
use crate::error::{Error, Result};
use crate::fetcher::PageFetcher;
use crate::report::{RunReport, SiteReport};
use crate::writer::{ReportWriter, RunLog, WrittenFiles};

/// Load a configuration file and apply setting overrides
///
/// Failures are also appended to the run log. The log goes to the output
/// directory of the loaded settings once the file has been read, and to
/// `fallback_dir` when the file itself could not be loaded.
pub async fn load_config<O>(
    path: &Path,
    overrides: O,
    fallback_dir: &Path,
) -> Result<MonitorConfig>
where
    O: FnOnce(&mut Settings),
{
    let mut config = match MonitorConfig::load(path).await {
        Ok(config) => config,
        Err(e) => return Err(record_config_error(fallback_dir, e)),
    };

    overrides(&mut config.settings);
    if let Err(e) = config.settings.validate() {
        return Err(record_config_error(&config.settings.output_dir, e));
    }

    Ok(config)
}

fn record_config_error(dir: &Path, e: ConfigError) -> Error {
    let e = Error::from(e);
    let logged = RunLog::open(dir).and_then(|mut log| log.error(&e.to_string()));
    if let Err(log_err) = logged {
        warn!("Could not record configuration error in {}: {}", dir.display(), log_err);
    }
    e
}

/// Fetch and analyze every target
///
/// `on_site` is called with each finished site report, in configured order.
/// Fetch failures are recorded on the site report and never stop the run.
pub async fn check_sites<F, P>(
    fetcher: &F,
    targets: &[Target],
    concurrency: usize,
    mut on_site: P,
) -> RunReport
where
    F: PageFetcher + Sync,
    P: FnMut(&SiteReport),
{
    let mut report = RunReport::new(Local::now());

    let mut sites = stream::iter(targets)
        .map(|target| async move {
            let result = fetcher.fetch(&target.url).await;
            SiteReport::from_fetch(target, result)
        })
        .buffered(concurrency.max(1));

    while let Some(site) = sites.next().await {
        match site.failure_reason() {
            Some(reason) => info!("{} failed: {}", site.url, reason),
            None => info!(
                "{} fetched in {}ms",
                site.url,
                site.fetch_time_ms.unwrap_or_default()
            ),
        }
        on_site(&site);
        report.push(site);
    }

    report
}

/// Run a full monitoring cycle and write its output
///
/// Returns the written file paths together with the report. Only output
/// failures are errors.
#[instrument(skip_all, fields(targets = config.targets.len()))]
pub async fn run_monitor<F, P>(
    config: &MonitorConfig,
    fetcher: &F,
    on_site: P,
) -> Result<(RunReport, WrittenFiles)>
where
    F: PageFetcher + Sync,
    P: FnMut(&SiteReport),
{
    let settings = &config.settings;
    let mut writer = ReportWriter::new(&settings.output_dir, settings.write_json)?;
    writer.log().info(&format!(
        "Starting monitoring cycle for {} sites",
        config.targets.len()
    ))?;

    let report = check_sites(fetcher, &config.targets, settings.concurrency, on_site).await;
    info!(
        "Checked {} sites: {} ok, {} failed",
        report.sites().len(),
        report.success_count(),
        report.failure_count()
    );

    let files = writer.write(&report).await?;
    Ok((report, files))
}
