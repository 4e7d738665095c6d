//! Item error types.

use bazaar_shared::AppError;
use thiserror::Error;

use crate::image::ImageError;

/// Item operation errors.
#[derive(Debug, Error)]
pub enum ItemError {
    /// Submission names a category that does not exist.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Positional lookup outside `[1, len]`.
    #[error("no item at position {0}")]
    PositionOutOfRange(i64),

    /// Image storage failed.
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// Repository operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ItemError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::UnknownCategory(_) => Self::Validation(err.to_string()),
            ItemError::PositionOutOfRange(_) => Self::NotFound(err.to_string()),
            ItemError::Image(image) => image.into(),
            ItemError::Repository(msg) => Self::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        let err = AppError::from(ItemError::UnknownCategory("toys".into()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Validation error: unknown category: toys");

        let err = AppError::from(ItemError::PositionOutOfRange(7));
        assert_eq!(err.status_code(), 404);

        let err = AppError::from(ItemError::repository("disk I/O error"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Database error: disk I/O error");
    }

    #[test]
    fn test_image_errors_keep_their_mapping() {
        let err = AppError::from(ItemError::from(ImageError::Operation("denied".into())));
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }
}
