//! # Page Extractor
//!
//! Turns fetched HTML plus a keyword list into structured SEO signals. This
//! is the only place that looks inside a page.
//!
//! ## Key Components
//!
//! - `analyze_page`: parses once and returns meta data and keyword findings
//! - `PageAnalysis`: title, description and structure counts for a page
//! - `KeywordFinding`: found flag, first word position and density of a keyword
//! - `tokenize`: the word splitting shared by pages and keywords
//!
//! Extraction never fails. HTML is parsed leniently, and anything that cannot
//! be found is reported as an empty string or zero.

mod keywords;
mod meta;
mod text;

pub use keywords::{KeywordFinding, find_keyword, scan_keywords};
pub use meta::{count_images_missing_alt, extract_description, extract_title};
pub use text::tokenize;

use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// On-page SEO signals of one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// Text of the `<title>` element, or empty
    pub title: String,

    /// Content of the meta description, or empty
    pub description: String,

    /// Number of `<h1>` elements
    pub h1_count: usize,

    /// Number of `<h2>` elements
    pub h2_count: usize,

    /// Number of images without alt text
    pub images_missing_alt: usize,

    /// Number of visible words
    pub word_count: usize,
}

/// Everything extracted from one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageExtraction {
    /// Meta data and structure counts
    pub analysis: PageAnalysis,

    /// One finding per keyword, in keyword order
    pub findings: Vec<KeywordFinding>,
}

/// Extract meta data and scan for keywords
///
/// # Arguments
///
/// * `html` - Raw HTML of the page
/// * `keywords` - Keywords to look for, in the order they should be reported
#[instrument(skip(html), fields(html_len = html.len()))]
pub fn analyze_page(html: &str, keywords: &[String]) -> PageExtraction {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!("HTML parsed with {} recoverable errors", document.errors.len());
    }

    let words = text::visible_words(&document);
    let analysis = PageAnalysis {
        title: extract_title(&document),
        description: extract_description(&document),
        h1_count: meta::count_elements(&document, "h1"),
        h2_count: meta::count_elements(&document, "h2"),
        images_missing_alt: count_images_missing_alt(&document),
        word_count: words.len(),
    };
    let findings = scan_keywords(&words, keywords);

    PageExtraction { analysis, findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_analyze_page() {
        let html = r#"<!DOCTYPE html>
        <html>
            <head>
                <title>SEO Guide</title>
                <meta name="description" content="A guide to on-page SEO">
            </head>
            <body>
                <h1>Welcome to the guide</h1>
                <p>Good SEO starts with content.</p>
                <img src="x.png">
            </body>
        </html>"#;

        let extraction = analyze_page(html, &keywords(&["seo", "Content", "backlinks"]));

        assert_eq!(extraction.analysis.title, "SEO Guide");
        assert_eq!(extraction.analysis.description, "A guide to on-page SEO");
        assert_eq!(extraction.analysis.h1_count, 1);
        assert_eq!(extraction.analysis.h2_count, 0);
        assert_eq!(extraction.analysis.images_missing_alt, 1);
        assert_eq!(extraction.analysis.word_count, 9);

        // welcome to the guide good seo starts with content
        assert_eq!(extraction.findings[0].position, Some(5));
        assert_eq!(extraction.findings[1].position, Some(8));
        assert!(!extraction.findings[2].found);
        assert_eq!(extraction.findings[2].position, None);
    }

    #[test]
    fn test_malformed_html_degrades() {
        let html = "<html><head><title>Broken<body><p>unclosed <div><span>seo";
        let extraction = analyze_page(html, &keywords(&["seo"]));

        // Must not panic; whatever survives parsing is reported
        assert_eq!(extraction.findings.len(), 1);
        assert_eq!(extraction.analysis.description, "");
    }

    #[test]
    fn test_garbage_input() {
        let extraction = analyze_page("\u{0}<<<>>>&&&", &keywords(&["seo"]));

        assert_eq!(extraction.analysis.title, "");
        assert!(!extraction.findings[0].found);
    }

    #[test]
    fn test_head_text_is_not_scanned_without_body() {
        let html = "<head><title>seo secret</title></head><frameset><frame src=a.html></frameset>";
        let extraction = analyze_page(html, &keywords(&["seo"]));

        assert_eq!(extraction.analysis.title, "seo secret");
        assert_eq!(extraction.analysis.word_count, 0);
        assert!(!extraction.findings[0].found);
        assert_eq!(extraction.findings[0].density, 0.0);
    }

    #[test]
    fn test_no_title_gives_empty_string() {
        let extraction = analyze_page("<p>seo</p>", &keywords(&["seo"]));

        assert_eq!(extraction.analysis.title, "");
        assert_eq!(extraction.findings[0].position, Some(0));
    }
}
