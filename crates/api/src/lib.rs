//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Error to response mapping
//! - Tracing, panic recovery, CORS and body-limit middleware

pub mod error;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use sea_orm::DatabaseConnection;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use bazaar_core::image::ImageStore;
use bazaar_core::item::ItemService;
use bazaar_db::ItemRepository;
use bazaar_shared::{AppConfig, AppError};

use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Content-addressed image store.
    pub images: Arc<ImageStore>,
}

impl AppState {
    /// Item service bound to this state's pool and image store.
    #[must_use]
    pub fn item_service(&self) -> ItemService<ItemRepository> {
        let repo = ItemRepository::new((*self.db).clone());
        ItemService::new(self.images.clone(), Arc::new(repo))
    }
}

/// Settings for the HTTP surface that are fixed at startup.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// The one origin browsers may call the API from.
    pub allowed_origin: HeaderValue,
    /// Largest accepted request body, uploads included.
    pub max_upload_bytes: usize,
}

impl HttpOptions {
    /// Build options from an origin URL and an upload limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `front_url` is not a valid header value.
    pub fn new(front_url: &str, max_upload_bytes: usize) -> Result<Self, InvalidHeaderValue> {
        Ok(Self {
            allowed_origin: HeaderValue::from_str(front_url)?,
            max_upload_bytes,
        })
    }

    /// Build options from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured origin is not a valid header value.
    pub fn from_config(config: &AppConfig) -> Result<Self, InvalidHeaderValue> {
        Self::new(&config.cors.front_url, config.images.max_upload_bytes)
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, options: &HttpOptions) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(DefaultBodyLimit::max(options.max_upload_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(options.allowed_origin.clone())
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE]),
        )
        .with_state(state)
}

/// Turns a handler panic into a 500 with the usual error body.
#[allow(clippy::needless_pass_by_value)]
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Handler panicked");

    ApiError::from(AppError::Internal("request handler panicked".to_string())).into_response()
}
