#![no_main]

use libfuzzer_sys::fuzz_target;

use snippet_vault::extractor::{cleaner::MAX_SNIPPET_CHARS, extract};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as a document; extraction must not panic
    let html = String::from_utf8_lossy(data);

    let snippet = extract(&html, "https://example.com");
    assert!(!snippet.title.is_empty());
    assert!(snippet.snippet.chars().count() <= MAX_SNIPPET_CHARS + 3);
});
