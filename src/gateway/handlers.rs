use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    app_state::AppState,
    error::{ApiError, ApiJson, ErrorResponse},
    gateway::{
        dtos::{StoredRecordsResponse, UploadPayload, UploadResponse},
        service::{resolve_records, upload_with_fallback},
    },
};

#[utoipa::path(
    post,
    path = "/api/storage/upload",
    tag = "storage",
    request_body = UploadPayload,
    responses(
        (status = 200, description = "Payload stored, possibly under a mock id", body = UploadResponse),
        (status = 400, description = "Missing address or data", body = ErrorResponse)
    )
)]
pub async fn upload(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UploadPayload>,
) -> Result<Json<UploadResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let stored = upload_with_fallback(
        state.gateway.as_ref(),
        payload.data,
        payload.signature,
        payload.address,
        payload.tags,
    )
    .await;

    Ok(Json(UploadResponse {
        message: stored.message().to_string(),
        id: stored.id,
        gateway_url: stored.gateway_url,
        timestamp: stored.timestamp,
    }))
}

#[utoipa::path(
    get,
    path = "/api/storage/query/{wallet}",
    tag = "storage",
    params(("wallet" = String, Path, description = "Owner wallet address")),
    responses(
        (status = 200, description = "Stored records that could be resolved", body = StoredRecordsResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn query(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<StoredRecordsResponse>, ApiError> {
    let snippets = state.snippet_repo.list_by_wallet(&wallet).await?;
    let records = resolve_records(state.gateway.as_ref(), &snippets).await;
    Ok(Json(StoredRecordsResponse { snippets: records }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app_state::test_support::MockState,
        gateway::{GatewayError, client::MockStorageGateway, mock::mock_id},
        repositories::snippet::MockSnippetRepositoryTrait,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/upload", post(upload))
            .route("/query/{wallet}", get(query))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_upload_reports_mock_fallback() {
        let mut gateway = MockStorageGateway::new();
        gateway
            .expect_upload()
            .returning(|_| Err(GatewayError::Malformed("down".to_string())));
        gateway
            .expect_gateway_url()
            .returning(|id| format!("https://gw/{}", id));

        let state = MockState {
            gateway: Some(gateway),
            ..Default::default()
        }
        .build();

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "data": "abc", "signature": "s", "address": "0x1", "tags": [] }).to_string(),
            ))
            .unwrap();

        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: UploadResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.id, mock_id("abc"));
        assert_eq!(parsed.gateway_url, format!("https://gw/{}", mock_id("abc")));
        assert!(parsed.message.contains("mock"));
    }

    #[tokio::test]
    async fn test_upload_requires_address() {
        let state = MockState::default().build();

        let request = Request::builder()
            .method("POST")
            .uri("/upload")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "data": "abc", "address": " " }).to_string()))
            .unwrap();

        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_database_error() {
        let mut snippets = MockSnippetRepositoryTrait::new();
        snippets
            .expect_list_by_wallet()
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let state = MockState {
            snippets: Some(snippets),
            ..Default::default()
        }
        .build();

        let request = Request::builder()
            .uri("/query/0xabc")
            .body(Body::empty())
            .unwrap();

        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Database error: connection refused");
    }
}
