use crate::entities::StatusCheck;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepositoryTrait: Send + Sync {
    async fn create(&self, client_name: &str) -> Result<StatusCheck>;
    /// Oldest first.
    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>>;
}

#[derive(Clone)]
pub struct StatusRepository {
    pool: Pool<Postgres>,
}

impl StatusRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepositoryTrait for StatusRepository {
    async fn create(&self, client_name: &str) -> Result<StatusCheck> {
        let record = sqlx::query_as::<_, StatusCheck>(
            r#"
            INSERT INTO status_checks (id, client_name)
            VALUES ($1, $2)
            RETURNING id, client_name, timestamp
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(client_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let records = sqlx::query_as::<_, StatusCheck>(
            r#"
            SELECT id, client_name, timestamp
            FROM status_checks
            ORDER BY timestamp ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
