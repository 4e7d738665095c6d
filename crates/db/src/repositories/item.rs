//! Item repository for database operations.
//!
//! Implements item queries using SeaORM. Every read inner-joins `category`
//! so items carry their category name, and orders by `items.id`.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use tracing::debug;

use crate::entities::{category, items};
use bazaar_core::item::{Item, ItemError, ItemRepository as ItemRepoTrait, NewItem};

/// Item repository implementation.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    db: DatabaseConnection,
}

impl ItemRepository {
    /// Create a new item repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Flattened `items ⋈ category` row.
#[derive(Debug, FromQueryResult)]
struct ItemRow {
    id: i32,
    name: String,
    category: String,
    image_name: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            image_name: row.image_name,
        }
    }
}

/// `SELECT items.id, items.name, category.name AS category, items.image_name
///  FROM items INNER JOIN category ON items.category_id = category.id
///  ORDER BY items.id`
fn joined_items() -> Select<items::Entity> {
    items::Entity::find()
        .select_only()
        .column(items::Column::Id)
        .column(items::Column::Name)
        .column_as(category::Column::Name, "category")
        .column(items::Column::ImageName)
        .join(JoinType::InnerJoin, items::Relation::Category.def())
        .order_by_asc(items::Column::Id)
}

fn repository_error(e: &sea_orm::DbErr) -> ItemError {
    ItemError::repository(e.to_string())
}

impl ItemRepoTrait for ItemRepository {
    async fn find_category_id(&self, name: &str) -> Result<Option<i32>, ItemError> {
        let model = category::Entity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| repository_error(&e))?;

        Ok(model.map(|c| c.id))
    }

    async fn create(&self, item: NewItem) -> Result<i32, ItemError> {
        let active_model = items::ActiveModel {
            name: Set(item.name),
            category_id: Set(Some(item.category_id)),
            image_name: Set(item.image_name),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| repository_error(&e))?;

        debug!(item_id = model.id, "Item row inserted");
        Ok(model.id)
    }

    async fn list(&self) -> Result<Vec<Item>, ItemError> {
        let rows = joined_items()
            .into_model::<ItemRow>()
            .all(&self.db)
            .await
            .map_err(|e| repository_error(&e))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn find_at(&self, offset: u64) -> Result<Option<Item>, ItemError> {
        let row = joined_items()
            .offset(offset)
            .into_model::<ItemRow>()
            .one(&self.db)
            .await
            .map_err(|e| repository_error(&e))?;

        Ok(row.map(Item::from))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Item>, ItemError> {
        let rows = joined_items()
            .filter(items::Column::Name.like(format!("%{keyword}%")))
            .into_model::<ItemRow>()
            .all(&self.db)
            .await
            .map_err(|e| repository_error(&e))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}
