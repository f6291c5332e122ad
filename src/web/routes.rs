//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Answers browser preflights; the relay sets its own headers on GET
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/podcasts", get(handlers::podcasts))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
