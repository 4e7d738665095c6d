//! Item types and data structures.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A listed item, with its category name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Item name.
    pub name: String,
    /// Category name.
    pub category: String,
    /// Content-addressed image file name.
    pub image_name: String,
}

/// Wrapper used by the list and search responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    /// Items in listing order.
    pub items: Vec<Item>,
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

/// Input for submitting a new item.
#[derive(Debug, Clone)]
pub struct CreateItemInput {
    /// Item name.
    pub name: String,
    /// Category name; must already exist.
    pub category: String,
    /// Raw image bytes.
    pub image: Bytes,
}

/// Row to insert once the category and image are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Item name.
    pub name: String,
    /// Resolved category ID.
    pub category_id: i32,
    /// Stored image name.
    pub image_name: String,
}
