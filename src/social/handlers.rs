use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    app_state::AppState,
    entities::Comment,
    error::{ApiError, ApiJson, ErrorResponse},
    repositories::NewComment,
    social::{
        dtos::{
            CommentRequest, CommentsResponse, FollowRequest, LikeRequest, LikeResponse,
            MessageResponse,
        },
        service::{FollowOutcome, SocialGraph, UnfollowOutcome},
    },
};

fn graph(state: &AppState) -> SocialGraph<'_> {
    SocialGraph::new(state.profile_repo.as_ref(), state.social_repo.as_ref())
}

#[utoipa::path(
    post,
    path = "/api/social/follow",
    tag = "social",
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Followed, or already following", body = MessageResponse),
        (status = 400, description = "Invalid addresses", body = ErrorResponse)
    )
)]
pub async fn follow(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<FollowRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let message = match graph(&state)
        .follow(&payload.follower_address, &payload.following_address)
        .await?
    {
        FollowOutcome::Followed => "Successfully followed user",
        FollowOutcome::AlreadyFollowing => "Already following this user",
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/social/unfollow",
    tag = "social",
    request_body = FollowRequest,
    responses(
        (status = 200, description = "Unfollowed, or was not following", body = MessageResponse),
        (status = 400, description = "Invalid addresses", body = ErrorResponse)
    )
)]
pub async fn unfollow(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<FollowRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let message = match graph(&state)
        .unfollow(&payload.follower_address, &payload.following_address)
        .await?
    {
        UnfollowOutcome::Unfollowed => "Successfully unfollowed user",
        UnfollowOutcome::NotFollowing => "Not following this user",
    };

    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/social/like",
    tag = "social",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Like toggled", body = LikeResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse)
    )
)]
pub async fn like(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LikeRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let liked = graph(&state)
        .toggle_like(&payload.user_address, &payload.snippet_id)
        .await?;
    Ok(Json(LikeResponse { liked }))
}

#[utoipa::path(
    post,
    path = "/api/social/comment",
    tag = "social",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Created comment", body = Comment),
        (status = 400, description = "Missing fields", body = ErrorResponse)
    )
)]
pub async fn comment(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CommentRequest>,
) -> Result<Json<Comment>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let created = graph(&state)
        .comment(NewComment {
            user_address: payload.user_address,
            snippet_id: payload.snippet_id,
            content: payload.content,
        })
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    get,
    path = "/api/social/comments/{snippet_id}",
    tag = "social",
    params(("snippet_id" = String, Path, description = "Storage id of the snippet")),
    responses(
        (status = 200, description = "Comments, newest first", body = CommentsResponse)
    )
)]
pub async fn comments(
    State(state): State<AppState>,
    Path(snippet_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let comments = graph(&state).comments(&snippet_id).await?;
    Ok(Json(CommentsResponse { comments }))
}
