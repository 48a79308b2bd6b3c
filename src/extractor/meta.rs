//! Meta tag extraction and page structure audit

use scraper::{Html, Selector};
use tracing::warn;

/// Parse a CSS selector, logging instead of failing
fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Failed to parse selector '{}': {}", css, e);
            None
        }
    }
}

/// Text of the first `<title>`, whitespace collapsed, or `""`
pub fn extract_title(document: &Html) -> String {
    let Some(title_selector) = selector("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .unwrap_or_default()
}

/// Content of `<meta name="description">`, or `""`
///
/// The `name` attribute is compared case-insensitively since pages in the
/// wild use `Description` as often as `description`.
pub fn extract_description(document: &Html) -> String {
    let Some(meta_selector) = selector("meta[name]") else {
        return String::new();
    };

    document
        .select(&meta_selector)
        .find(|element| {
            element
                .value()
                .attr("name")
                .is_some_and(|name| name.trim().eq_ignore_ascii_case("description"))
        })
        .and_then(|element| element.value().attr("content"))
        .map(collapse_whitespace)
        .unwrap_or_default()
}

/// Number of elements matching `css`
pub fn count_elements(document: &Html, css: &str) -> usize {
    selector(css)
        .map(|s| document.select(&s).count())
        .unwrap_or(0)
}

/// Number of `<img>` elements whose `alt` is missing or blank
pub fn count_images_missing_alt(document: &Html) -> usize {
    let Some(img_selector) = selector("img") else {
        return 0;
    };

    document
        .select(&img_selector)
        .filter(|img| {
            img.value()
                .attr("alt")
                .is_none_or(|alt| alt.trim().is_empty())
        })
        .count()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description() {
        let html = r#"<html><head>
            <title>
                Rust   SEO Monitor
            </title>
            <meta name="Description" content="Checks pages for keywords">
        </head><body></body></html>"#;
        let document = Html::parse_document(html);

        assert_eq!(extract_title(&document), "Rust SEO Monitor");
        assert_eq!(
            extract_description(&document),
            "Checks pages for keywords"
        );
    }

    #[test]
    fn test_missing_tags_are_empty() {
        let document = Html::parse_document("<html><body><p>No head here</p></body></html>");

        assert_eq!(extract_title(&document), "");
        assert_eq!(extract_description(&document), "");
    }

    #[test]
    fn test_description_without_content_is_empty() {
        let document = Html::parse_document(r#"<meta name="description"><title>T</title>"#);
        assert_eq!(extract_description(&document), "");
        assert_eq!(extract_title(&document), "T");
    }

    #[test]
    fn test_structure_counts() {
        let html = r#"<body>
            <h1>One</h1><h1>Two</h1>
            <h2>Sub</h2>
            <img src="a.png" alt="A">
            <img src="b.png">
            <img src="c.png" alt="  ">
        </body>"#;
        let document = Html::parse_document(html);

        assert_eq!(count_elements(&document, "h1"), 2);
        assert_eq!(count_elements(&document, "h2"), 1);
        assert_eq!(count_images_missing_alt(&document), 2);
    }
}
