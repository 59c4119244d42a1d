use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entities::{ContentType, SnippetMetadata},
    repositories::NewSnippet,
    summarizer::{ImageInput, SummarizeError, SummaryInput, parser::MAX_TAGS},
};

pub const DEFAULT_NETWORK: &str = "devnet";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub title: String,
    pub snippet: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: Option<ContentType>,
}

impl SummarizeRequest {
    pub fn into_input(self) -> SummaryInput {
        match self.content_type.unwrap_or_default() {
            ContentType::WebSnippet => SummaryInput::WebSnippet {
                title: self.title,
                url: self.url,
                snippet: self.snippet,
            },
            content_type => SummaryInput::Text {
                content_type,
                title: self.title,
                content: self.snippet,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessTextRequest {
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
}

impl ProcessTextRequest {
    pub fn into_input(self) -> SummaryInput {
        match self.content_type {
            ContentType::WebSnippet => SummaryInput::WebSnippet {
                title: self.title,
                url: None,
                snippet: self.content,
            },
            content_type => SummaryInput::Text {
                content_type,
                title: self.title,
                content: self.content,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessImageRequest {
    pub title: String,
    /// `data:image/<kind>;base64,<payload>`
    pub image_data: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Optional; when sent it must be `image`.
    #[serde(default)]
    pub content_type: Option<ContentType>,
}

impl ProcessImageRequest {
    pub fn validate(&self) -> Result<(), String> {
        match self.content_type {
            None | Some(ContentType::Image) => Ok(()),
            Some(other) => Err(format!(
                "process-image only handles image content, got {}",
                other.as_str()
            )),
        }
    }

    pub fn into_input(self) -> Result<SummaryInput, SummarizeError> {
        let image = ImageInput::from_data_url(&self.image_data)?;
        Ok(SummaryInput::Image {
            title: self.title,
            description: self.description,
            image,
        })
    }
}

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

fn default_public() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveSnippetRequest {
    pub wallet_address: String,
    pub storage_id: String,
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_network")]
    pub network: String,
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

impl SaveSnippetRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.wallet_address.trim().is_empty() {
            return Err("Wallet address is required".to_string());
        }
        if self.storage_id.trim().is_empty() {
            return Err("Storage id is required".to_string());
        }
        if self.tags.len() > MAX_TAGS {
            return Err(format!("At most {} tags are allowed", MAX_TAGS));
        }
        Ok(())
    }
}

impl From<SaveSnippetRequest> for NewSnippet {
    fn from(req: SaveSnippetRequest) -> Self {
        NewSnippet {
            wallet_address: req.wallet_address,
            storage_id: req.storage_id,
            url: req.url,
            title: req.title,
            summary: req.summary,
            tags: req.tags,
            network: req.network,
            content_type: req.content_type,
            mood: req.mood,
            theme: req.theme,
            is_public: req.is_public,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SnippetsResponse {
    pub snippets: Vec<SnippetMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn save_request(tags: Vec<&str>) -> SaveSnippetRequest {
        serde_json::from_value(json!({
            "wallet_address": "0xa",
            "storage_id": "tx1",
            "title": "t",
            "summary": "s.",
            "tags": tags,
        }))
        .unwrap()
    }

    #[test]
    fn test_save_defaults() {
        let req = save_request(vec!["a"]);
        assert_eq!(req.network, DEFAULT_NETWORK);
        assert_eq!(req.content_type, ContentType::WebSnippet);
        assert!(req.is_public);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_save_rejects_too_many_tags() {
        let req = save_request(vec!["a", "b", "c", "d"]);
        assert_eq!(req.validate().unwrap_err(), "At most 3 tags are allowed");
    }

    #[test]
    fn test_summarize_routes_by_content_type() {
        let web = SummarizeRequest {
            title: "t".into(),
            snippet: "s".into(),
            url: None,
            content_type: None,
        };
        assert_eq!(web.into_input().content_type(), ContentType::WebSnippet);

        let quote = SummarizeRequest {
            title: "t".into(),
            snippet: "s".into(),
            url: None,
            content_type: Some(ContentType::Quote),
        };
        assert_eq!(quote.into_input().content_type(), ContentType::Quote);
    }

    #[test]
    fn test_image_request_validates_data_url() {
        let bad = ProcessImageRequest {
            title: "t".into(),
            image_data: "not a data url".into(),
            description: None,
            content_type: None,
        };
        assert!(bad.into_input().unwrap_err().is_client_error());
    }

    #[test]
    fn test_image_request_content_type() {
        let mut request = ProcessImageRequest {
            title: "t".into(),
            image_data: "data:image/png;base64,aGVsbG8=".into(),
            description: None,
            content_type: None,
        };
        assert!(request.validate().is_ok());

        request.content_type = Some(ContentType::Image);
        assert!(request.validate().is_ok());

        request.content_type = Some(ContentType::Poetry);
        assert_eq!(
            request.validate().unwrap_err(),
            "process-image only handles image content, got poetry"
        );
    }
}
