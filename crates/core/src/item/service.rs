//! Item service implementation.

use std::sync::Arc;

use tracing::info;

use super::error::ItemError;
use super::types::{CreateItemInput, Item, ItemList, NewItem};
use crate::image::ImageStore;

/// Repository trait for item persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait ItemRepository: Send + Sync {
    /// Look up a category ID by its name.
    fn find_category_id(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<i32>, ItemError>> + Send;

    /// Insert a new item row and return its ID.
    fn create(
        &self,
        item: NewItem,
    ) -> impl std::future::Future<Output = Result<i32, ItemError>> + Send;

    /// List every item joined with its category, in ascending ID order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send;

    /// Item at zero-based `offset` in listing order.
    fn find_at(
        &self,
        offset: u64,
    ) -> impl std::future::Future<Output = Result<Option<Item>, ItemError>> + Send;

    /// Items whose name matches `%keyword%`, in listing order.
    fn search(
        &self,
        keyword: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Item>, ItemError>> + Send;
}

/// Item service combining the image store and the item repository.
pub struct ItemService<R: ItemRepository> {
    images: Arc<ImageStore>,
    repo: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new item service.
    #[must_use]
    pub fn new(images: Arc<ImageStore>, repo: Arc<R>) -> Self {
        Self { images, repo }
    }

    /// Submit a new item.
    ///
    /// The category is resolved before anything is written, so an unknown
    /// category leaves no image behind. An image written before a failing
    /// insert is not removed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The category does not exist
    /// - The image cannot be written
    /// - The insert fails
    pub async fn create(&self, input: CreateItemInput) -> Result<Item, ItemError> {
        let category_id = self
            .repo
            .find_category_id(&input.category)
            .await?
            .ok_or_else(|| ItemError::UnknownCategory(input.category.clone()))?;

        let image_name = self.images.save(input.image).await?;

        let id = self
            .repo
            .create(NewItem {
                name: input.name.clone(),
                category_id,
                image_name: image_name.clone(),
            })
            .await?;

        info!(
            item_id = id,
            name = %input.name,
            category = %input.category,
            image_name = %image_name,
            "Item created"
        );

        Ok(Item {
            id,
            name: input.name,
            category: input.category,
            image_name,
        })
    }

    /// List every item.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails.
    pub async fn list(&self) -> Result<ItemList, ItemError> {
        self.repo.list().await.map(ItemList::from)
    }

    /// Get the item at 1-based `position` in listing order.
    ///
    /// This is a rank, not a stored ID; the two agree only while no rows
    /// have ever been removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside `[1, len]` or the
    /// repository query fails.
    pub async fn get_by_position(&self, position: i64) -> Result<Item, ItemError> {
        let offset = position
            .checked_sub(1)
            .and_then(|p| u64::try_from(p).ok())
            .ok_or(ItemError::PositionOutOfRange(position))?;

        self.repo
            .find_at(offset)
            .await?
            .ok_or(ItemError::PositionOutOfRange(position))
    }

    /// Search items by name substring.
    ///
    /// An empty keyword matches every item.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository query fails.
    pub async fn search(&self, keyword: &str) -> Result<ItemList, ItemError> {
        self.repo.search(keyword).await.map(ItemList::from)
    }
}
