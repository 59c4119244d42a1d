use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    app_state::AppState,
    error::{ApiError, ErrorResponse},
    feed::composer::{FeedComposer, FeedPage, FeedWindow},
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    /// Number of snippets to skip, default 0.
    pub skip: Option<i64>,
    /// Page size, default 20, clamped to 1..=100.
    pub limit: Option<i64>,
    /// Wallet whose likes are reflected in `is_liked`.
    pub viewer: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/feed/public",
    tag = "feed",
    params(FeedQuery),
    responses(
        (status = 200, description = "Public snippets, newest first", body = FeedPage),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn public_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedPage>, ApiError> {
    let composer = FeedComposer::new(
        state.snippet_repo.as_ref(),
        state.profile_repo.as_ref(),
        state.social_repo.as_ref(),
    );
    let viewer = query.viewer.as_deref().filter(|v| !v.trim().is_empty());

    let page = composer
        .public_feed(FeedWindow::new(query.skip, query.limit), viewer)
        .await?;
    Ok(Json(page))
}
