//! Item service for marketplace listings.
//!
//! This module provides business logic for items including:
//! - Item submission (image storage + row insert)
//! - Full listing
//! - Positional lookup
//! - Name search

mod error;
mod service;
mod types;

pub use error::ItemError;
pub use service::{ItemRepository, ItemService};
pub use types::{CreateItemInput, Item, ItemList, NewItem};
