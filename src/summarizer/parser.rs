use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::ContentType;

pub const MAX_TAGS: usize = 3;
pub const WEB_FALLBACK_TAGS: [&str; 3] = ["web", "content", "snippet"];
pub const DEFAULT_MOOD: &str = "neutral";
pub const DEFAULT_THEME: &str = "general";

/// Structured result of one summarizer reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AiSummary {
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Parse a pipe-delimited reply. Never fails: malformed replies degrade to
/// the fallback values for `content_type`.
///
/// Web snippets expect `summary|tag1,tag2,tag3`. Everything else expects
/// `summary|tag1,tag2,tag3|mood|theme`; with only two or three parts mood and
/// theme default, and without any `|` the whole reply becomes the summary.
pub fn parse_response(raw: &str, content_type: ContentType) -> AiSummary {
    match content_type {
        ContentType::WebSnippet => parse_web_snippet(raw),
        other => parse_creative(raw, other),
    }
}

fn parse_web_snippet(raw: &str) -> AiSummary {
    let (summary, tags) = match raw.split_once('|') {
        Some((summary, tags)) => (summary, split_tags(tags)),
        None => (raw, owned(&WEB_FALLBACK_TAGS)),
    };

    AiSummary {
        summary: finish_summary(summary),
        tags,
        mood: None,
        theme: None,
    }
}

fn parse_creative(raw: &str, content_type: ContentType) -> AiSummary {
    let parts: Vec<&str> = raw.split('|').collect();

    let (summary, tags, mood, theme) = match parts.as_slice() {
        [summary, tags, mood, theme, ..] => {
            (*summary, split_tags(tags), mood.trim(), theme.trim())
        }
        [summary, tags] | [summary, tags, _] => {
            (*summary, split_tags(tags), DEFAULT_MOOD, DEFAULT_THEME)
        }
        _ => (
            raw,
            owned(&[content_type.as_str(), "personal", "creative"]),
            DEFAULT_MOOD,
            DEFAULT_THEME,
        ),
    };

    AiSummary {
        summary: finish_summary(summary),
        tags,
        mood: Some(mood.to_string()),
        theme: Some(theme.to_string()),
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .take(MAX_TAGS)
        .collect()
}

fn owned(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}

fn finish_summary(summary: &str) -> String {
    let summary = summary.trim();
    if summary.ends_with('.') {
        summary.to_string()
    } else {
        format!("{}.", summary)
    }
}
