use regex::Regex;
use std::sync::LazyLock;

/// Maximum snippet length in characters, before the ellipsis marker.
pub const MAX_SNIPPET_CHARS: usize = 2000;
pub const ELLIPSIS: &str = "...";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Word characters, whitespace, and a small punctuation set survive.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^\w\s.,!?;:"()\-]"#).unwrap());

/// Collapse whitespace runs to one space, trim, then drop every character
/// outside the whitelist.
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    DISALLOWED_CHARS.replace_all(&collapsed, "").into_owned()
}

/// Cut to `MAX_SNIPPET_CHARS` characters and mark the cut with `...`.
pub fn truncate_snippet(text: &str) -> String {
    match text.char_indices().nth(MAX_SNIPPET_CHARS) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}
