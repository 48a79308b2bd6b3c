//! Keyword scanning over a page's visible words

use serde::{Deserialize, Serialize};

use super::text::tokenize;

/// Result of looking for one keyword on one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordFinding {
    /// Keyword as configured
    pub keyword: String,

    /// Whether the keyword occurs in the visible text
    pub found: bool,

    /// Word index of the first occurrence; `None` when not found
    pub position: Option<usize>,

    /// Number of non-overlapping occurrences
    pub occurrences: usize,

    /// Occurrences divided by total word count
    pub density: f64,
}

impl KeywordFinding {
    /// A finding for a keyword that does not occur
    pub fn not_found(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            found: false,
            position: None,
            occurrences: 0,
            density: 0.0,
        }
    }
}

/// Scan `words` for each keyword, in keyword order
pub fn scan_keywords(words: &[String], keywords: &[String]) -> Vec<KeywordFinding> {
    keywords
        .iter()
        .map(|keyword| find_keyword(words, keyword))
        .collect()
}

/// Locate a (possibly multi-word) keyword in a word sequence
///
/// The keyword matches where all of its words appear consecutively. The
/// first match determines the position.
pub fn find_keyword(words: &[String], keyword: &str) -> KeywordFinding {
    let needle = tokenize(keyword);
    let width = needle.len();
    if width == 0 || width > words.len() {
        return KeywordFinding::not_found(keyword);
    }

    let mut position = None;
    let mut occurrences = 0;
    let mut i = 0;
    while i + width <= words.len() {
        if words[i..i + width] == needle[..] {
            position.get_or_insert(i);
            occurrences += 1;
            i += width;
        } else {
            i += 1;
        }
    }

    KeywordFinding {
        keyword: keyword.to_string(),
        found: position.is_some(),
        position,
        occurrences,
        density: occurrences as f64 / words.len() as f64,
    }
}
