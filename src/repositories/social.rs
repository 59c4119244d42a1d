use crate::entities::Comment;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub user_address: String,
    pub snippet_id: String,
    pub content: String,
}

/// Follow edges, likes and comments. Boolean results report whether a row
/// was actually inserted or removed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialRepositoryTrait: Send + Sync {
    async fn insert_follow(&self, follower: &str, following: &str) -> Result<bool>;
    async fn delete_follow(&self, follower: &str, following: &str) -> Result<bool>;
    async fn insert_like(&self, user_address: &str, snippet_id: &str) -> Result<bool>;
    async fn delete_like(&self, user_address: &str, snippet_id: &str) -> Result<bool>;
    async fn like_exists(&self, user_address: &str, snippet_id: &str) -> Result<bool>;
    async fn count_likes(&self, snippet_id: &str) -> Result<i64>;
    async fn insert_comment(&self, comment: NewComment) -> Result<Comment>;
    /// Newest first.
    async fn list_comments(&self, snippet_id: &str) -> Result<Vec<Comment>>;
    async fn count_comments(&self, snippet_id: &str) -> Result<i64>;
}

#[derive(Clone)]
pub struct SocialRepository {
    pool: Pool<Postgres>,
}

impl SocialRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialRepositoryTrait for SocialRepository {
    async fn insert_follow(&self, follower: &str, following: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO follows (follower_address, following_address)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(follower)
        .bind(following)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_follow(&self, follower: &str, following: &str) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM follows WHERE follower_address = $1 AND following_address = $2",
        )
        .bind(follower)
        .bind(following)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_like(&self, user_address: &str, snippet_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO likes (user_address, snippet_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_address)
        .bind(snippet_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_like(&self, user_address: &str, snippet_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM likes WHERE user_address = $1 AND snippet_id = $2")
            .bind(user_address)
            .bind(snippet_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn like_exists(&self, user_address: &str, snippet_id: &str) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_address = $1 AND snippet_id = $2)",
        )
        .bind(user_address)
        .bind(snippet_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_likes(&self, snippet_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE snippet_id = $1")
            .bind(snippet_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_comment(&self, comment: NewComment) -> Result<Comment> {
        let record = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, user_address, snippet_id, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_address, snippet_id, content, created_at, likes_count
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&comment.user_address)
        .bind(&comment.snippet_id)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_comments(&self, snippet_id: &str) -> Result<Vec<Comment>> {
        let records = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_address, snippet_id, content, created_at, likes_count
            FROM comments
            WHERE snippet_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(snippet_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn count_comments(&self, snippet_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE snippet_id = $1")
            .bind(snippet_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
