//! Migration round-trip tests.

use bazaar_db::{
    connect,
    migration::{Migrator, MigratorTrait},
};
use bazaar_shared::config::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tempfile::TempDir;

async fn open(dir: &TempDir) -> DatabaseConnection {
    let url = format!(
        "sqlite:{}?mode=rwc",
        dir.path().join("migrations.sqlite3").display()
    );
    connect(&DatabaseConfig::with_url(url))
        .await
        .expect("Failed to connect to database")
}

async fn table_exists(db: &DatabaseConnection, table: &str) -> bool {
    let sql = format!("SELECT name FROM sqlite_master WHERE type = 'table' AND name = '{table}'");
    db.query_one(Statement::from_string(db.get_database_backend(), sql))
        .await
        .expect("Query should succeed")
        .is_some()
}

#[tokio::test]
async fn test_up_creates_tables() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir).await;

    Migrator::up(&db, None).await.expect("up should succeed");

    assert!(table_exists(&db, "items").await);
    assert!(table_exists(&db, "category").await);
}

#[tokio::test]
async fn test_up_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir).await;

    Migrator::up(&db, None).await.expect("first up should succeed");
    Migrator::up(&db, None).await.expect("second up should succeed");

    let pending = Migrator::get_pending_migrations(&db).await.unwrap();
    assert!(pending.is_empty());
}

#[tokio::test]
async fn test_down_drops_tables() {
    let dir = TempDir::new().unwrap();
    let db = open(&dir).await;

    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.expect("down should succeed");

    assert!(!table_exists(&db, "items").await);
    assert!(!table_exists(&db, "category").await);
}
