//! Error to HTTP response mapping.

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use bazaar_core::{image::ImageError, item::ItemError};
use bazaar_shared::AppError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable message, including the underlying cause.
    pub message: String,
}

impl ApiError {
    /// Shorthand for a client input error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self(AppError::Validation(msg.into()))
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            warn!(error = %self.0, status = status.as_u16(), "Request rejected");
        } else {
            error!(error = %self.0, status = status.as_u16(), "Request failed");
        }

        let body = ErrorBody {
            error: self.0.error_code(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        Self(err.into())
    }
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        Self(err.into())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let text = err.body_text();
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self(AppError::PayloadTooLarge(text))
        } else {
            Self::validation(format!("unreadable upload: {text}"))
        }
    }
}
