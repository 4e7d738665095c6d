//! Greeting and health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use super::MessageResponse;
use crate::AppState;

/// Message served at the root path.
pub const GREETING: &str = "Hello, world!";

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(GREETING))
}

/// Health check handler.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates greeting and health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
