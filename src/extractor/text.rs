//! Visible text extraction and word tokenization

use scraper::{ElementRef, Html, Selector};

/// Elements whose text never renders
const HIDDEN_ELEMENTS: [&str; 5] = ["head", "script", "style", "noscript", "template"];

/// Split text into lowercase words
///
/// Anything that is not alphanumeric separates words, so "on-page" yields
/// `["on", "page"]`. Keywords and page text go through the same function,
/// which is what makes matching case-insensitive.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Collect the visible words of a document in reading order
///
/// Reads the `<body>` when there is one and the whole document otherwise.
/// Text inside head, script, style, noscript and template elements is
/// skipped.
pub(crate) fn visible_words(document: &Html) -> Vec<String> {
    let root = body(document).unwrap_or_else(|| document.root_element());

    let mut words = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });
        if !hidden {
            words.extend(tokenize(text));
        }
    }
    words
}

fn body(document: &Html) -> Option<ElementRef<'_>> {
    let selector = Selector::parse("body").ok()?;
    document.select(&selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("On-page SEO, done right!"),
            vec!["on", "page", "seo", "done", "right"]
        );
        assert!(tokenize("  -- ... ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_unicode_letters() {
        assert_eq!(tokenize("Größe café"), vec!["größe", "café"]);
    }

    #[test]
    fn test_visible_words_skips_head_and_scripts() {
        let html = r#"<html>
            <head><title>Hidden Title</title><style>body { color: red }</style></head>
            <body>
                <h1>Hello World</h1>
                <script>var tracking = "seo";</script>
                <p>Plain <b>text</b> here</p>
                <noscript>enable javascript</noscript>
            </body>
        </html>"#;
        let document = Html::parse_document(html);

        assert_eq!(
            visible_words(&document),
            vec!["hello", "world", "plain", "text", "here"]
        );
    }

    #[test]
    fn test_frameset_page_has_no_visible_words() {
        let html = r#"<html>
            <head><title>seo secret</title></head>
            <frameset><frame src="a.html"></frameset>
        </html>"#;
        let document = Html::parse_document(html);

        assert!(visible_words(&document).is_empty());
    }

    #[test]
    fn test_visible_words_without_markup() {
        let document = Html::parse_document("just some words");
        assert_eq!(visible_words(&document), vec!["just", "some", "words"]);
    }
}
