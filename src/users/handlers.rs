use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::{
    app_state::AppState,
    entities::UserProfile,
    error::{ApiError, ApiJson, ErrorResponse},
    repositories::ProfileWrite,
    users::dtos::{ProfileRequest, UsersResponse},
};

pub const DISCOVER_LIMIT: i64 = 50;

#[utoipa::path(
    get,
    path = "/api/users/{wallet}",
    tag = "users",
    params(("wallet" = String, Path, description = "Wallet address")),
    responses(
        (status = 200, description = "Stored profile, or zeroed defaults", body = UserProfile),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    let stored = state.profile_repo.find(&wallet).await?;
    Ok(Json(stored.unwrap_or_else(|| UserProfile::empty(wallet))))
}

#[utoipa::path(
    post,
    path = "/api/users/profile",
    tag = "users",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Created or updated profile", body = UserProfile),
        (status = 400, description = "Missing wallet address", body = ErrorResponse)
    )
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let (wallet, fields) = payload.into_parts();
    let existing = state.profile_repo.find(&wallet).await?;
    let write = ProfileWrite::resolve(existing.as_ref(), &wallet, fields);

    let profile = state.profile_repo.apply(write).await?;
    info!(wallet = %profile.wallet_address, "profile saved");
    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/users/discover",
    tag = "users",
    responses(
        (status = 200, description = "Most followed users", body = UsersResponse)
    )
)]
pub async fn discover(State(state): State<AppState>) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.profile_repo.discover(DISCOVER_LIMIT).await?;
    Ok(Json(UsersResponse { users }))
}
