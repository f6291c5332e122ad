//! HTTP request handlers

use super::state::AppState;
use crate::podcasts::{ErrorResponse, PodcastQuery, PodcastsResponse};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Podcast listing relay
pub async fn podcasts(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = PodcastQuery::from_pairs(params);
    match state.source.fetch(&query).await {
        Ok(items) => (
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            ],
            Json(PodcastsResponse::new(items)),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Podcast relay failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e))
        }
    }
}

/// JSON error body with the given status
fn error_response(status: StatusCode, message: String) -> Response {
    // Json sets Content-Type: application/json
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
