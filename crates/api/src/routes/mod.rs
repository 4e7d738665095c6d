//! API route definitions.

use axum::Router;
use serde::Serialize;

use crate::AppState;

pub mod health;
pub mod images;
pub mod items;
pub mod search;

/// Body of plain acknowledgement responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Wrap `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(items::routes())
        .merge(search::routes())
        .merge(images::routes())
}
