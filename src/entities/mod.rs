use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt::{Display, Formatter};
use utoipa::ToSchema;
use uuid::Uuid;

/// --- PostgreSQL Enums ---
#[derive(
    sqlx::Type, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[sqlx(type_name = "content_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    WebSnippet,
    Text,
    Poetry,
    Image,
    Thought,
    Quote,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::WebSnippet => "web_snippet",
            ContentType::Text => "text",
            ContentType::Poetry => "poetry",
            ContentType::Image => "image",
            ContentType::Thought => "thought",
            ContentType::Quote => "quote",
        }
    }
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// --- Tables ---

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct SnippetMetadata {
    pub id: Uuid,
    pub wallet_address: String,
    pub storage_id: String,
    pub url: Option<String>,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>, // at most 3
    pub network: String,
    pub content_type: ContentType,
    pub mood: Option<String>,
    pub theme: Option<String>,
    pub is_public: bool,
    #[sqlx(rename = "created_at")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub wallet_address: String, // PK
    pub username: Option<String>,
    pub bio: Option<String>,
    pub followers_count: i64,
    pub following_count: i64,
    pub snippets_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Placeholder returned for wallets that never wrote a profile.
    pub fn empty(wallet_address: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            wallet_address: wallet_address.into(),
            username: None,
            bio: None,
            followers_count: 0,
            following_count: 0,
            snippets_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct FollowEdge {
    pub follower_address: String,  // PK
    pub following_address: String, // PK
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Like {
    pub user_address: String, // PK
    pub snippet_id: String,   // PK, snippets.storage_id
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub user_address: String,
    pub snippet_id: String, // snippets.storage_id
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
}

/// A client check-in recorded by `POST /api/status`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}
