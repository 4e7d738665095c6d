//! Image download route.

use axum::{
    Router,
    extract::{Path, State, rejection::PathRejection},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

/// Creates the image routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/image/{filename}", get(get_image))
}

/// GET /image/{filename}
///
/// Serves the default image when `filename` is valid but absent.
async fn get_image(
    State(state): State<AppState>,
    filename: Result<Path<String>, PathRejection>,
) -> ApiResult<Response> {
    let Path(filename) = filename.map_err(|e| ApiError::validation(e.body_text()))?;
    let image = state.images.load(&filename).await?;
    let mime = mime_guess::from_path(&image.name).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.as_ref())], image.data).into_response())
}
