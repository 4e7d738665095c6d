//! Item submission and listing routes.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Multipart, Path, State,
        multipart::MultipartRejection,
        rejection::PathRejection,
    },
    routing::get,
};
use tracing::info;

use bazaar_core::item::{CreateItemInput, Item, ItemList};

use super::MessageResponse;
use crate::{
    AppState,
    error::{ApiError, ApiResult},
};

/// Creates the item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{position}", get(get_item))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Multipart fields of an item submission, as they arrive.
#[derive(Debug, Default)]
struct ItemForm {
    name: Option<String>,
    category: Option<String>,
    image: Option<Bytes>,
}

impl ItemForm {
    /// Drain the multipart stream. Unknown fields are skipped.
    async fn read(multipart: &mut Multipart) -> ApiResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let field_name = field.name().map(str::to_owned);
            match field_name.as_deref() {
                Some("name") => form.name = Some(field.text().await?),
                Some("category") => form.category = Some(field.text().await?),
                Some("image") => form.image = Some(field.bytes().await?),
                _ => {}
            }
        }

        Ok(form)
    }

    fn into_input(self) -> ApiResult<CreateItemInput> {
        Ok(CreateItemInput {
            name: self.name.ok_or_else(|| missing_field("name"))?,
            category: self.category.ok_or_else(|| missing_field("category"))?,
            image: self.image.ok_or_else(|| missing_field("image"))?,
        })
    }
}

fn missing_field(field: &str) -> ApiError {
    ApiError::validation(format!("missing form field: {field}"))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /items
///
/// Accepts a multipart form with `name`, `category` and `image` fields.
async fn create_item(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let mut multipart = multipart.map_err(|e| ApiError::validation(e.body_text()))?;
    let input = ItemForm::read(&mut multipart).await?.into_input()?;

    info!(
        name = %input.name,
        category = %input.category,
        image_bytes = input.image.len(),
        "Received item"
    );

    let item = state.item_service().create(input).await?;

    Ok(Json(MessageResponse::new(format!(
        "item received: {}",
        item.name
    ))))
}

/// GET /items
async fn list_items(State(state): State<AppState>) -> ApiResult<Json<ItemList>> {
    let items = state.item_service().list().await?;
    Ok(Json(items))
}

/// GET /items/{position}
///
/// `position` is 1-based over the listing order, not a row ID.
async fn get_item(
    State(state): State<AppState>,
    position: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let Path(position) = position.map_err(|e| ApiError::validation(e.body_text()))?;
    let item = state.item_service().get_by_position(position).await?;
    Ok(Json(item))
}
