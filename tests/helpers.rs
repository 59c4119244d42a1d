#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use snippet_vault::{
    app_state::AppState,
    gateway::MockGateway,
    repositories::{ProfileRepository, SnippetRepository, SocialRepository, StatusRepository},
    routes,
    summarizer::AnthropicSummarizer,
};

pub const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

/// Migrated pool for `TEST_DATABASE_URL`, or `None` when it is unset so the
/// calling test can skip.
pub async fn test_pool() -> Option<Pool<Postgres>> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("{} not set, skipping database test", TEST_DATABASE_URL);
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

/// Pool that never connects, for routes that do not touch the database.
pub fn lazy_pool() -> Pool<Postgres> {
    Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("lazy pool")
}

pub fn test_state(pool: Pool<Postgres>, summarizer: AnthropicSummarizer) -> AppState {
    AppState {
        snippet_repo: Arc::new(SnippetRepository::new(pool.clone())),
        profile_repo: Arc::new(ProfileRepository::new(pool.clone())),
        social_repo: Arc::new(SocialRepository::new(pool.clone())),
        status_repo: Arc::new(StatusRepository::new(pool.clone())),
        summarizer: Arc::new(summarizer),
        gateway: Arc::new(MockGateway::new("https://gateway.test")),
        db_pool: pool,
    }
}

/// Full router over real repositories, the offline gateway and a summarizer
/// without credentials.
pub fn test_app(pool: Pool<Postgres>) -> Router {
    routes::router(test_state(
        pool,
        AnthropicSummarizer::new(None, "test-model", "http://127.0.0.1:9"),
    ))
}

/// Wallet address no other test run will reuse.
pub fn unique_wallet(label: &str) -> String {
    format!("0x{}{}", label, Uuid::new_v4().simple())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
