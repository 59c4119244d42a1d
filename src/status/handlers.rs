use axum::{Json, extract::State};
use tracing::info;

use crate::{
    app_state::AppState,
    entities::StatusCheck,
    error::{ApiError, ApiJson, ErrorResponse},
    status::dtos::StatusCheckRequest,
};

pub const STATUS_LIST_LIMIT: i64 = 1000;

#[utoipa::path(
    post,
    path = "/api/status",
    tag = "health",
    request_body = StatusCheckRequest,
    responses(
        (status = 200, description = "Recorded check-in", body = StatusCheck),
        (status = 400, description = "Missing client name", body = ErrorResponse)
    )
)]
pub async fn create_status_check(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StatusCheckRequest>,
) -> Result<Json<StatusCheck>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let check = state.status_repo.create(&payload.client_name).await?;
    info!(client = %check.client_name, "status check recorded");
    Ok(Json(check))
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "health",
    responses(
        (status = 200, description = "Recorded check-ins, oldest first", body = Vec<StatusCheck>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state.status_repo.list(STATUS_LIST_LIMIT).await?;
    Ok(Json(checks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app_state::test_support::MockState, repositories::status::MockStatusRepositoryTrait};
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/status", get(list_status_checks).post(create_status_check))
            .with_state(state)
    }

    fn check(client_name: &str) -> StatusCheck {
        StatusCheck {
            id: Uuid::new_v4(),
            client_name: client_name.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_record() {
        let mut status = MockStatusRepositoryTrait::new();
        status
            .expect_create()
            .withf(|name| name == "mobile")
            .times(1)
            .returning(|name| Ok(check(name)));

        let state = MockState {
            status: Some(status),
            ..Default::default()
        }
        .build();

        let request = Request::builder()
            .method("POST")
            .uri("/status")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "client_name": "mobile" }).to_string()))
            .unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: StatusCheck = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.client_name, "mobile");
    }

    #[tokio::test]
    async fn test_create_without_client_name_is_400() {
        let state = MockState::default().build();

        let request = Request::builder()
            .method("POST")
            .uri("/status")
            .header("content-type", "application/json")
            .body(Body::from(json!({}).to_string()))
            .unwrap();
        let response = app(state).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_is_capped() {
        let mut status = MockStatusRepositoryTrait::new();
        status
            .expect_list()
            .with(eq(STATUS_LIST_LIMIT))
            .returning(|_| Ok(vec![check("web"), check("cli")]));

        let state = MockState {
            status: Some(status),
            ..Default::default()
        }
        .build();

        let request = Request::builder().uri("/status").body(Body::empty()).unwrap();
        let response = app(state).oneshot(request).await.unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: Vec<StatusCheck> = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].client_name, "cli");
    }
}
