use std::fs;

use crate::extractor::cleaner::{ELLIPSIS, MAX_SNIPPET_CHARS};
use crate::extractor::extract;
use crate::extractor::reader::NO_TITLE;

#[test]
fn test_extract_article() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let result = extract(&html, "https://example.com/article");

    assert_eq!(result.url, "https://example.com/article");
    assert_eq!(result.title, "Sample Article - News Site");
    assert!(result.snippet.contains("first paragraph of the article"));
    assert!(result.snippet.contains("second paragraph, with a related link."));
    // `&` is outside the whitelist and the inline script/aside never contribute
    assert!(!result.snippet.contains('&'));
    assert!(!result.snippet.contains("trackArticleView"));
    assert!(!result.snippet.contains("newsletter"));
    assert!(!result.snippet.contains("Copyright"));
}

#[test]
fn test_extract_blog_post_uses_post_selector() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/blog.html")
        .expect("Failed to read test fixture");

    let result = extract(&html, "https://blog.example.com/post");

    assert_eq!(result.title, "How to Build Better Software | Tech Blog");
    assert!(result.snippet.starts_with("How to Build Better Software"));
    assert!(result.snippet.contains("Key Principles"));
    assert!(!result.snippet.contains("Popular posts"));
}

#[test]
fn test_body_fallback() {
    let html = "<html><head><title>Plain</title></head><body><div>Just   some\n text</div></body></html>";
    let result = extract(html, "https://example.com/plain");

    assert_eq!(result.title, "Plain");
    assert_eq!(result.snippet, "Just some text");
}

#[test]
fn test_long_content_is_truncated() {
    let html = format!(
        "<html><head><title>Long</title></head><body><article>{}</article></body></html>",
        "word ".repeat(1000)
    );
    let result = extract(&html, "https://example.com/long");

    assert!(result.snippet.ends_with(ELLIPSIS));
    assert_eq!(result.snippet.chars().count(), MAX_SNIPPET_CHARS + ELLIPSIS.len());
}

#[test]
fn test_missing_title() {
    let result = extract("<html><body><p>text</p></body></html>", "https://example.com");
    assert_eq!(result.title, NO_TITLE);
    assert_eq!(result.snippet, "text");
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let result = extract(html, "https://example.com/broken");

    assert_eq!(result.title, "Broken");
    assert!(result.snippet.contains("Unclosed tags"));
    assert!(result.snippet.contains("More content"));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract(&html, "https://example.com");
        }

        #[test]
        fn test_snippet_is_bounded(html in ".*") {
            let result = extract(&html, "https://example.com");
            prop_assert!(result.snippet.chars().count() <= MAX_SNIPPET_CHARS + ELLIPSIS.len());
            prop_assert!(!result.title.is_empty());
        }
    }
}
