use crate::entities::ContentType;

const WEB_SNIPPET_SYSTEM: &str = "You are a text summarization expert. For each text snippet provided, you must respond with exactly one sentence summary followed by a pipe symbol '|' and then exactly 3 topical tags separated by commas. Format: 'Summary sentence here|tag1,tag2,tag3'";

/// System prompt for the reply shape `parse_response` expects for this type.
pub fn system_prompt(content_type: ContentType) -> String {
    match content_type {
        ContentType::WebSnippet => WEB_SNIPPET_SYSTEM.to_string(),
        other => format!(
            "You are a thoughtful curator of personal {kind}. For each {kind} provided, respond with exactly one sentence summary, then a pipe symbol '|', then exactly 3 tags separated by commas, then '|', then a single word describing the mood, then '|', then a short phrase naming the theme. Format: 'Summary sentence here|tag1,tag2,tag3|mood|theme'",
            kind = label(other),
        ),
    }
}

pub fn web_snippet_prompt(title: &str, url: Option<&str>, snippet: &str) -> String {
    match url {
        Some(url) => format!(
            "Please summarize this web snippet from '{}' ({}) and provide 3 topical tags. Content: {}",
            title, url, snippet
        ),
        None => format!(
            "Please summarize this web snippet from '{}' and provide 3 topical tags. Content: {}",
            title, snippet
        ),
    }
}

pub fn text_prompt(content_type: ContentType, title: &str, content: &str) -> String {
    format!(
        "Please summarize this {} titled '{}', and provide 3 tags, its mood and its theme. Content: {}",
        label(content_type),
        title,
        content
    )
}

pub fn image_prompt(title: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!(
            "Please describe this image titled '{}' and provide 3 tags, its mood and its theme. The author describes it as: {}",
            title, description
        ),
        None => format!(
            "Please describe this image titled '{}' and provide 3 tags, its mood and its theme.",
            title
        ),
    }
}

fn label(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::WebSnippet => "web snippet",
        ContentType::Text => "text",
        ContentType::Poetry => "poem",
        ContentType::Image => "image",
        ContentType::Thought => "thought",
        ContentType::Quote => "quote",
    }
}
