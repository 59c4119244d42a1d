use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{instrument, warn};

use crate::summarizer::errors::SummarizeError;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 512;

/// Base64 image payload split out of a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub media_type: String,
    pub data: String,
}

impl ImageInput {
    /// Accepts `data:image/<kind>;base64,<payload>`.
    pub fn from_data_url(data_url: &str) -> Result<Self, SummarizeError> {
        let rest = data_url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| SummarizeError::InvalidImage("expected a data: URL".to_string()))?;
        let (meta, data) = rest
            .split_once(',')
            .ok_or_else(|| SummarizeError::InvalidImage("missing payload".to_string()))?;
        let media_type = meta.strip_suffix(";base64").ok_or_else(|| {
            SummarizeError::InvalidImage("payload must be base64 encoded".to_string())
        })?;

        if !media_type.starts_with("image/") {
            return Err(SummarizeError::InvalidImage(format!(
                "unsupported media type '{}'",
                media_type
            )));
        }
        if data.is_empty() {
            return Err(SummarizeError::InvalidImage("empty payload".to_string()));
        }

        Ok(Self {
            media_type: media_type.to_string(),
            data: data.to_string(),
        })
    }
}

/// One system prompt plus one user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub text: String,
    pub image: Option<ImageInput>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Send one request and return the raw reply text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizeError>;
}

/// Client for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicSummarizer {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl AnthropicSummarizer {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn body(&self, request: &CompletionRequest) -> Value {
        let mut content = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            content.push(json!({
                "type": "image",
                "source": {
                    "type": "base64",
                    "media_type": image.media_type,
                    "data": image.data,
                }
            }));
        }
        content.push(json!({ "type": "text", "text": request.text }));

        json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": request.system,
            "messages": [{ "role": "user", "content": content }],
        })
    }
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl Summarizer for AnthropicSummarizer {
    #[instrument(skip_all, fields(model = %self.model, has_image = request.image.is_some()))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, SummarizeError> {
        let api_key = self.api_key.as_deref().ok_or(SummarizeError::MissingApiKey)?;

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.body(&request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "summarizer rejected request");
            return Err(SummarizeError::Upstream { status, body });
        }

        let parsed: MessagesResponse = response.json().await?;
        let text: String = parsed
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text)
            .collect();

        Ok(text)
    }
}
