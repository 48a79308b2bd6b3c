//! CSV rendering, one row per (site, keyword)

use serde::Serialize;

use crate::error::Result;
use crate::report::RunReport;

/// Value written to the position column when a keyword is absent
pub const NOT_FOUND_POSITION: i64 = -1;

/// One CSV row; field order defines the header
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    site: &'a str,
    keyword: &'a str,
    found: bool,
    position: i64,
    meta_title: &'a str,
    meta_description: &'a str,
    fetch_time_ms: Option<u64>,
}

/// Render the report as CSV bytes
///
/// The header is always written, even for an empty report.
pub fn render_csv(report: &RunReport) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record([
        "site",
        "keyword",
        "found",
        "position",
        "meta_title",
        "meta_description",
        "fetch_time_ms",
    ])?;

    for site in report.sites() {
        for finding in site.keyword_results() {
            let position = finding
                .position
                .and_then(|p| i64::try_from(p).ok())
                .unwrap_or(NOT_FOUND_POSITION);
            writer.serialize(CsvRow {
                site: &site.url,
                keyword: &finding.keyword,
                found: finding.found,
                position,
                meta_title: &site.analysis.title,
                meta_description: &site.analysis.description,
                fetch_time_ms: site.fetch_time_ms,
            })?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| crate::Error::Io(e.into_error()))
}
