//! Human-readable summary report

use std::fmt::Write;

use crate::report::{RunReport, SiteReport, SiteStatus};

/// Render the per-site summary
pub fn render_text_report(report: &RunReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &RunReport) -> std::fmt::Result {
    writeln!(out, "SEO Monitoring Summary Report")?;
    writeln!(out, "Generated at: {}", report.run_id())?;
    writeln!(
        out,
        "Sites checked: {} ({} ok, {} failed)",
        report.sites().len(),
        report.success_count(),
        report.failure_count()
    )?;

    writeln!(out, "\nKeyword Positions:")?;
    for site in report.sites() {
        writeln!(out, "\n{}:", site.url)?;
        if let Some(reason) = site.failure_reason() {
            writeln!(out, "- Not checked: {}", reason)?;
            continue;
        }
        for finding in site.keyword_results() {
            match finding.position {
                Some(position) => writeln!(
                    out,
                    "- {}: Position {} ({} occurrence{}, density {:.4})",
                    finding.keyword,
                    position,
                    finding.occurrences,
                    if finding.occurrences == 1 { "" } else { "s" },
                    finding.density
                )?,
                None => writeln!(out, "- {}: Not found", finding.keyword)?,
            }
        }
    }

    writeln!(out, "\nPerformance Metrics:")?;
    for site in report.sites() {
        write_performance(out, site)?;
    }

    writeln!(out, "\nMeta Tags Analysis:")?;
    for site in report.sites().iter().filter(|s| s.is_success()) {
        let analysis = &site.analysis;
        writeln!(out, "\n{}:", site.url)?;
        writeln!(out, "- Title: {}", or_missing(&analysis.title))?;
        writeln!(out, "- Description: {}", or_missing(&analysis.description))?;
        writeln!(out, "- H1 Tags: {}", analysis.h1_count)?;
        writeln!(out, "- H2 Tags: {}", analysis.h2_count)?;
        writeln!(out, "- Missing Alt Tags: {}", analysis.images_missing_alt)?;
        writeln!(out, "- Word Count: {}", analysis.word_count)?;
    }

    Ok(())
}

fn write_performance(out: &mut String, site: &SiteReport) -> std::fmt::Result {
    writeln!(out, "\n{}:", site.url)?;
    match &site.status {
        SiteStatus::Ok {
            http_status,
            content_length,
        } => {
            let seconds = site.fetch_time_ms.unwrap_or_default() as f64 / 1000.0;
            writeln!(out, "- Response Time: {:.2} seconds", seconds)?;
            writeln!(out, "- Status Code: {}", http_status)?;
            writeln!(out, "- Content Length: {} bytes", content_length)
        }
        SiteStatus::Failed { reason } => writeln!(out, "- Failed: {}", reason),
    }
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { "(missing)" } else { value }
}
