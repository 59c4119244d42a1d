//! AI summarization: prompt construction, the model client, and parsing of
//! the pipe-delimited replies into summaries and tags.

pub mod client;
pub mod errors;
pub mod parser;
pub mod prompts;

pub use client::{AnthropicSummarizer, CompletionRequest, ImageInput, Summarizer};
pub use errors::SummarizeError;
pub use parser::{AiSummary, parse_response};

use tracing::{info, instrument};

use crate::entities::ContentType;

/// What is being summarized. Each variant maps to one prompt shape.
#[derive(Debug, Clone)]
pub enum SummaryInput {
    WebSnippet {
        title: String,
        url: Option<String>,
        snippet: String,
    },
    Text {
        content_type: ContentType,
        title: String,
        content: String,
    },
    Image {
        title: String,
        description: Option<String>,
        image: ImageInput,
    },
}

impl SummaryInput {
    pub fn content_type(&self) -> ContentType {
        match self {
            SummaryInput::WebSnippet { .. } => ContentType::WebSnippet,
            SummaryInput::Text { content_type, .. } => *content_type,
            SummaryInput::Image { .. } => ContentType::Image,
        }
    }

    fn into_request(self) -> CompletionRequest {
        let system = prompts::system_prompt(self.content_type());
        match self {
            SummaryInput::WebSnippet {
                title,
                url,
                snippet,
            } => CompletionRequest {
                system,
                text: prompts::web_snippet_prompt(&title, url.as_deref(), &snippet),
                image: None,
            },
            SummaryInput::Text {
                content_type,
                title,
                content,
            } => CompletionRequest {
                system,
                text: prompts::text_prompt(content_type, &title, &content),
                image: None,
            },
            SummaryInput::Image {
                title,
                description,
                image,
            } => CompletionRequest {
                system,
                text: prompts::image_prompt(&title, description.as_deref()),
                image: Some(image),
            },
        }
    }
}

/// Ask the model once and parse its reply. Malformed replies are absorbed by
/// the parser fallbacks; only the call itself can fail.
#[instrument(skip_all, fields(content_type = %input.content_type()))]
pub async fn summarize(
    summarizer: &dyn Summarizer,
    input: SummaryInput,
) -> Result<AiSummary, SummarizeError> {
    let content_type = input.content_type();
    let raw = summarizer.complete(input.into_request()).await?;
    let summary = parse_response(&raw, content_type);
    info!(tags = ?summary.tags, "content summarized");
    Ok(summary)
}
