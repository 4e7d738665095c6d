//! Image store error types.

use bazaar_shared::AppError;
use thiserror::Error;

/// Image store errors.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Requested name does not carry the image extension.
    #[error("Image path does not end with {extension}")]
    InvalidExtension {
        /// Expected extension.
        extension: &'static str,
    },

    /// Requested name is not a single plain file name.
    #[error("Image path must be a plain file name: {0}")]
    InvalidName(String),

    /// File not found in storage (also raised when the default is missing).
    #[error("image not found: {0}")]
    NotFound(String),

    /// Storage configuration error.
    #[error("image storage configuration error: {0}")]
    Configuration(String),

    /// OpenDAL operation error.
    #[error("image storage operation failed: {0}")]
    Operation(String),
}

impl ImageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether the error was caused by the requested name.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidExtension { .. } | Self::InvalidName(_))
    }
}

impl From<opendal::Error> for ImageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound(err.to_string()),
            _ => Self::Operation(err.to_string()),
        }
    }
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        if err.is_invalid_request() {
            Self::Validation(err.to_string())
        } else {
            Self::Storage(err.to_string())
        }
    }
}
