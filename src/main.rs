//! # SEO Monitor CLI
//!
//! Runs one monitoring cycle over the sites listed in a JSON configuration
//! file and writes the CSV results, text summary and run log to the output
//! directory.
//!
//! Command-line options override values from the configuration file.
//! Per-site fetch failures are reported in the output; only configuration and
//! write errors make the process exit non-zero.

mod telemetry;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use seo_monitor::config::{MonitorConfig, Settings};
use seo_monitor::fetcher::{HttpFetcher, PageFetcher, RateLimitedFetcher};
use seo_monitor::pipeline::{load_config, run_monitor};
use seo_monitor::writer::WrittenFiles;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check websites for keyword positions and SEO meta tags", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Directory for results and the run log
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Number of sites fetched at the same time
    #[arg(long)]
    concurrency: Option<usize>,

    /// Also write a JSON report
    #[arg(long)]
    json: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn apply(&self, settings: &mut Settings) {
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(concurrency) = self.concurrency {
            settings.concurrency = concurrency;
        }
        if self.json {
            settings.write_json = true;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing_subscriber(if cli.quiet { "info" } else { "warn" });

    let fallback_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| Settings::default().output_dir);
    let config = load_config(&cli.config, |settings| cli.apply(settings), &fallback_dir)
        .await
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    let fetcher = HttpFetcher::new(&config.settings).context("Failed to create HTTP client")?;
    let files = match config.settings.requests_per_minute.and_then(NonZeroU32::new) {
        Some(rpm) => {
            info!("Rate limiting requests to {} per minute", rpm);
            monitor(&cli, &config, RateLimitedFetcher::per_minute(fetcher, rpm)).await?
        }
        None => monitor(&cli, &config, fetcher).await?,
    };

    println!("Results saved to {}", files.csv.display());
    println!("Summary saved to {}", files.text.display());
    if let Some(json) = &files.json {
        println!("JSON report saved to {}", json.display());
    }

    Ok(())
}

async fn monitor<F>(cli: &Cli, config: &MonitorConfig, fetcher: F) -> anyhow::Result<WrittenFiles>
where
    F: PageFetcher + Sync,
{
    let progress_bar = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(config.targets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("##-"),
        );
        bar.set_message("Checking sites...");
        bar
    };

    let result = run_monitor(config, &fetcher, |site| {
        progress_bar.inc(1);
        progress_bar.set_message(site.url.clone());
    })
    .await;

    match result {
        Ok((report, files)) => {
            progress_bar.finish_with_message(format!(
                "{} ok, {} failed",
                report.success_count(),
                report.failure_count()
            ));
            Ok(files)
        }
        Err(e) => {
            progress_bar.abandon_with_message("Failed");
            Err(e).context("Failed to write results")
        }
    }
}
