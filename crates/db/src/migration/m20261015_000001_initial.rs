//! Initial schema: categories and the items that reference them.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sql in UP_SQL {
            db.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for sql in DOWN_SQL {
            db.execute_unprepared(sql).await?;
        }
        Ok(())
    }
}

// SQLite runs one statement per call.
const UP_SQL: [&str; 3] = [
    r"
CREATE TABLE IF NOT EXISTS category (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);
",
    r"
-- category_id is nullable; the listing queries inner-join it away
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category_id INTEGER REFERENCES category(id),
    image_name TEXT NOT NULL
);
",
    r"
CREATE INDEX IF NOT EXISTS idx_items_category ON items(category_id);
",
];

const DOWN_SQL: [&str; 2] = [
    "DROP TABLE IF EXISTS items;",
    "DROP TABLE IF EXISTS category;",
];
