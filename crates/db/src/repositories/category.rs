//! Category repository for database operations.
//!
//! Categories are only ever created out of band (seeder, tests); the HTTP
//! API reads them.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::category;

/// Category repository.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a category by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<category::Model>, DbErr> {
        category::Entity::find()
            .filter(category::Column::Name.eq(name))
            .one(&self.db)
            .await
    }

    /// Lists all categories by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<category::Model>, DbErr> {
        category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
    }

    /// Creates a new category.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the name is taken.
    pub async fn create(&self, name: &str) -> Result<category::Model, DbErr> {
        let category = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        category.insert(&self.db).await
    }

    /// Returns the category called `name`, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or insert fails.
    pub async fn ensure(&self, name: &str) -> Result<(category::Model, bool), DbErr> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok((existing, false));
        }

        self.create(name).await.map(|created| (created, true))
    }
}
