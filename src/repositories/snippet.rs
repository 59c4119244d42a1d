use crate::entities::{ContentType, SnippetMetadata};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const SNIPPET_COLUMNS: &str = "id, wallet_address, storage_id, url, title, summary, tags, network, \
     content_type, mood, theme, is_public, created_at";

/// Fields supplied by the client when a snippet has been stored on the
/// gateway. The id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnippet {
    pub wallet_address: String,
    pub storage_id: String,
    pub url: Option<String>,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub network: String,
    pub content_type: ContentType,
    pub mood: Option<String>,
    pub theme: Option<String>,
    pub is_public: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetRepositoryTrait: Send + Sync {
    async fn create(&self, snippet: NewSnippet) -> Result<SnippetMetadata>;
    /// Newest first.
    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<SnippetMetadata>>;
    /// Public snippets only, newest first.
    async fn list_public(&self, skip: i64, limit: i64) -> Result<Vec<SnippetMetadata>>;
}

#[derive(Clone)]
pub struct SnippetRepository {
    pool: Pool<Postgres>,
}

impl SnippetRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetRepositoryTrait for SnippetRepository {
    async fn create(&self, snippet: NewSnippet) -> Result<SnippetMetadata> {
        let sql = format!(
            r#"
            INSERT INTO snippets
                  (id, wallet_address, storage_id, url, title, summary, tags,
                   network, content_type, mood, theme, is_public)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {SNIPPET_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, SnippetMetadata>(&sql)
            .bind(Uuid::new_v4())
            .bind(&snippet.wallet_address)
            .bind(&snippet.storage_id)
            .bind(&snippet.url)
            .bind(&snippet.title)
            .bind(&snippet.summary)
            .bind(&snippet.tags)
            .bind(&snippet.network)
            .bind(snippet.content_type)
            .bind(&snippet.mood)
            .bind(&snippet.theme)
            .bind(snippet.is_public)
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    async fn list_by_wallet(&self, wallet_address: &str) -> Result<Vec<SnippetMetadata>> {
        let sql = format!(
            "SELECT {SNIPPET_COLUMNS} FROM snippets
             WHERE wallet_address = $1
             ORDER BY created_at DESC"
        );

        let records = sqlx::query_as::<_, SnippetMetadata>(&sql)
            .bind(wallet_address)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn list_public(&self, skip: i64, limit: i64) -> Result<Vec<SnippetMetadata>> {
        let sql = format!(
            "SELECT {SNIPPET_COLUMNS} FROM snippets
             WHERE is_public
             ORDER BY created_at DESC
             OFFSET $1 LIMIT $2"
        );

        let records = sqlx::query_as::<_, SnippetMetadata>(&sql)
            .bind(skip)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }
}
