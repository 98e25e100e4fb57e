//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::docs::ApiDoc;
use super::handlers::{get_win_record, health, prometheus_metrics, update_win_record, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and metrics
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Win record
        .route("/api/win-record", get(get_win_record))
        .route("/api/update-win-record", post(update_win_record))
        // Docs
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
