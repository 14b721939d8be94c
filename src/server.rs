//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::State,
    http::Uri,
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::services::Clock;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Build the router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/og-story", get(handle_og_story))
        .route("/api-docs/openapi.json", get(api::handle_openapi))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .fallback(handle_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn handle_og_story(State(state): State<AppState>, uri: Uri) -> Response {
    api::handle_og_story(State(state.clock), uri).await
}

async fn handle_not_found(uri: Uri) -> ApiError {
    tracing::debug!(%uri, "No route matched");
    ApiError::NotFound
}
