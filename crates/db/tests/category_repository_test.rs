//! Integration tests for Category repository.

use bazaar_db::{
    CategoryRepository, connect,
    migration::{Migrator, MigratorTrait},
};
use bazaar_shared::config::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

async fn setup() -> (TempDir, DatabaseConnection) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!(
        "sqlite:{}?mode=rwc",
        dir.path().join("categories.sqlite3").display()
    );
    let db = connect(&DatabaseConfig::with_url(url))
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    (dir, db)
}

#[tokio::test]
async fn test_category_create_and_find_by_name() {
    let (_dir, db) = setup().await;
    let repo = CategoryRepository::new(db.clone());

    let created = repo.create("fashion").await.expect("Failed to create");
    let found = repo
        .find_by_name("fashion")
        .await
        .expect("Query should succeed")
        .expect("Category should exist");

    assert_eq!(found, created);
}

#[tokio::test]
async fn test_category_find_by_name_not_found() {
    let (_dir, db) = setup().await;
    let repo = CategoryRepository::new(db.clone());

    let result = repo
        .find_by_name("nonexistent")
        .await
        .expect("Query should succeed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_category_names_are_unique() {
    let (_dir, db) = setup().await;
    let repo = CategoryRepository::new(db.clone());

    repo.create("fashion").await.expect("Failed to create");
    let duplicate = repo.create("fashion").await;

    assert!(duplicate.is_err());
}

#[tokio::test]
async fn test_category_ensure_is_idempotent() {
    let (_dir, db) = setup().await;
    let repo = CategoryRepository::new(db.clone());

    let (first, created) = repo.ensure("food").await.expect("ensure should succeed");
    assert!(created);
    let (second, created) = repo.ensure("food").await.expect("ensure should succeed");
    assert!(!created);

    assert_eq!(first.id, second.id);
    assert_eq!(repo.list().await.unwrap().len(), 1);
}
