use axum::{
    Json, Router,
    http::HeaderName,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    app_state::AppState,
    entities::{Comment, ContentType, SnippetMetadata, StatusCheck, UserProfile},
    error::ErrorResponse,
    extractor::ExtractedSnippet,
    feed::{self, FeedItem, FeedPage},
    gateway::{self, GatewayTag},
    health, snippets, social, status,
    summarizer::AiSummary,
    users,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    info(title = "Snippet Vault API"),
    paths(
        health::root,
        health::health_check,
        status::handlers::create_status_check,
        status::handlers::list_status_checks,
        snippets::handlers::extract_snippet,
        snippets::handlers::summarize_snippet,
        snippets::handlers::process_text,
        snippets::handlers::process_image,
        snippets::handlers::save_snippet_metadata,
        snippets::handlers::get_snippets,
        gateway::handlers::upload,
        gateway::handlers::query,
        users::handlers::get_profile,
        users::handlers::upsert_profile,
        users::handlers::discover,
        social::handlers::follow,
        social::handlers::unfollow,
        social::handlers::like,
        social::handlers::comment,
        social::handlers::comments,
        feed::handlers::public_feed,
    ),
    components(schemas(
        ContentType,
        SnippetMetadata,
        UserProfile,
        Comment,
        StatusCheck,
        ExtractedSnippet,
        AiSummary,
        GatewayTag,
        FeedItem,
        FeedPage,
        ErrorResponse,
        health::RootResponse,
        health::HealthResponse,
        status::dtos::StatusCheckRequest,
        snippets::dtos::ExtractRequest,
        snippets::dtos::SummarizeRequest,
        snippets::dtos::ProcessTextRequest,
        snippets::dtos::ProcessImageRequest,
        snippets::dtos::SaveSnippetRequest,
        snippets::dtos::SnippetsResponse,
        gateway::dtos::UploadPayload,
        gateway::dtos::UploadResponse,
        gateway::dtos::StoredRecordsResponse,
        users::dtos::ProfileRequest,
        users::dtos::UsersResponse,
        social::dtos::FollowRequest,
        social::dtos::MessageResponse,
        social::dtos::LikeRequest,
        social::dtos::LikeResponse,
        social::dtos::CommentRequest,
        social::dtos::CommentsResponse,
    )),
    tags(
        (name = "health", description = "Liveness, banner and client check-ins"),
        (name = "snippets", description = "Extraction, summarization and snippet metadata"),
        (name = "storage", description = "Content-addressed storage gateway"),
        (name = "users", description = "Profiles"),
        (name = "social", description = "Follows, likes and comments"),
        (name = "feed", description = "Public feed"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Every route, unlayered. Useful for tests that only need the handlers.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", get(health::root))
        .route("/api/", get(health::root))
        .route("/api/health", get(health::health_check))
        .route(
            "/api/status",
            get(status::handlers::list_status_checks).post(status::handlers::create_status_check),
        )
        .route("/api/openapi.json", get(openapi_json))
        .route(
            "/api/extract-snippet",
            post(snippets::handlers::extract_snippet),
        )
        .route("/api/summarize", post(snippets::handlers::summarize_snippet))
        .route("/api/process-text", post(snippets::handlers::process_text))
        .route("/api/process-image", post(snippets::handlers::process_image))
        .route(
            "/api/save-snippet-metadata",
            post(snippets::handlers::save_snippet_metadata),
        )
        .route("/api/snippets/{wallet}", get(snippets::handlers::get_snippets))
        .route("/api/storage/upload", post(gateway::handlers::upload))
        .route("/api/storage/query/{wallet}", get(gateway::handlers::query))
        .route("/api/users/discover", get(users::handlers::discover))
        .route("/api/users/profile", post(users::handlers::upsert_profile))
        .route("/api/users/{wallet}", get(users::handlers::get_profile))
        .route("/api/social/follow", post(social::handlers::follow))
        .route("/api/social/unfollow", post(social::handlers::unfollow))
        .route("/api/social/like", post(social::handlers::like))
        .route("/api/social/comment", post(social::handlers::comment))
        .route(
            "/api/social/comments/{snippet_id}",
            get(social::handlers::comments),
        )
        .route("/api/feed/public", get(feed::handlers::public_feed))
}

/// The full application with CORS, request ids and request tracing.
pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    api_routes()
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
