use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::{
    app_state::AppState,
    entities::SnippetMetadata,
    error::{ApiError, ApiJson, ErrorResponse},
    extractor::{ExtractedSnippet, extract_from_url},
    repositories::ProfileCounter,
    snippets::dtos::{
        ExtractRequest, ProcessImageRequest, ProcessTextRequest, SaveSnippetRequest,
        SnippetsResponse, SummarizeRequest,
    },
    summarizer::{AiSummary, summarize},
};

#[utoipa::path(
    post,
    path = "/api/extract-snippet",
    tag = "snippets",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Title and main-content snippet", body = ExtractedSnippet),
        (status = 400, description = "URL could not be fetched", body = ErrorResponse)
    )
)]
pub async fn extract_snippet(
    ApiJson(payload): ApiJson<ExtractRequest>,
) -> Result<Json<ExtractedSnippet>, ApiError> {
    if payload.url.trim().is_empty() {
        return Err(ApiError::validation("URL is required"));
    }

    let snippet = extract_from_url(payload.url.trim()).await?;
    Ok(Json(snippet))
}

#[utoipa::path(
    post,
    path = "/api/summarize",
    tag = "snippets",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary and tags", body = AiSummary),
        (status = 500, description = "Summarizer unavailable", body = ErrorResponse)
    )
)]
pub async fn summarize_snippet(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SummarizeRequest>,
) -> Result<Json<AiSummary>, ApiError> {
    let summary = summarize(state.summarizer.as_ref(), payload.into_input()).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/process-text",
    tag = "snippets",
    request_body = ProcessTextRequest,
    responses(
        (status = 200, description = "Summary, tags, mood and theme", body = AiSummary),
        (status = 500, description = "Summarizer unavailable", body = ErrorResponse)
    )
)]
pub async fn process_text(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProcessTextRequest>,
) -> Result<Json<AiSummary>, ApiError> {
    let summary = summarize(state.summarizer.as_ref(), payload.into_input()).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/process-image",
    tag = "snippets",
    request_body = ProcessImageRequest,
    responses(
        (status = 200, description = "Description, tags, mood and theme", body = AiSummary),
        (status = 400, description = "Image data is not a base64 data URL, or content_type is not image", body = ErrorResponse),
        (status = 500, description = "Summarizer unavailable", body = ErrorResponse)
    )
)]
pub async fn process_image(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProcessImageRequest>,
) -> Result<Json<AiSummary>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let input = payload.into_input()?;
    let summary = summarize(state.summarizer.as_ref(), input).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/save-snippet-metadata",
    tag = "snippets",
    request_body = SaveSnippetRequest,
    responses(
        (status = 200, description = "Stored record", body = SnippetMetadata),
        (status = 400, description = "Invalid metadata", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn save_snippet_metadata(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SaveSnippetRequest>,
) -> Result<Json<SnippetMetadata>, ApiError> {
    payload.validate().map_err(ApiError::Validation)?;

    let record = state.snippet_repo.create(payload.into()).await?;
    state
        .profile_repo
        .adjust_counter(&record.wallet_address, ProfileCounter::Snippets, 1)
        .await?;

    info!(wallet = %record.wallet_address, storage_id = %record.storage_id, "snippet saved");
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/snippets/{wallet}",
    tag = "snippets",
    params(("wallet" = String, Path, description = "Owner wallet address")),
    responses(
        (status = 200, description = "Snippets, newest first", body = SnippetsResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_snippets(
    State(state): State<AppState>,
    Path(wallet): Path<String>,
) -> Result<Json<SnippetsResponse>, ApiError> {
    let snippets = state.snippet_repo.list_by_wallet(&wallet).await?;
    Ok(Json(SnippetsResponse { snippets }))
}
