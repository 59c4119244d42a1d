#![no_main]

use libfuzzer_sys::fuzz_target;

use snippet_vault::{
    entities::ContentType,
    summarizer::{parse_response, parser::MAX_TAGS},
};

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    for content_type in [ContentType::WebSnippet, ContentType::Poetry] {
        let summary = parse_response(&raw, content_type);
        assert!(summary.tags.len() <= MAX_TAGS);
        assert!(summary.summary.ends_with('.'));
    }
});
