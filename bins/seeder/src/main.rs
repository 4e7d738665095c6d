//! Category seeder for Bazaar development and testing.
//!
//! Items can only be submitted under an existing category, so a fresh
//! database needs these rows before the API is useful.
//!
//! Usage: cargo run --bin seeder [category ...]

use bazaar_db::{
    CategoryRepository, connect,
    migration::{Migrator, MigratorTrait},
};
use bazaar_shared::AppConfig;

/// Categories seeded when none are given on the command line.
const DEFAULT_CATEGORIES: &[&str] = &["fashion", "food", "electronics", "books", "home", "sports"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    println!("Connecting to {}...", config.database.url);
    let db = connect(&config.database).await?;

    println!("Running migrations...");
    Migrator::up(&db, None).await?;

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let categories: Vec<&str> = if requested.is_empty() {
        DEFAULT_CATEGORIES.to_vec()
    } else {
        requested.iter().map(String::as_str).collect()
    };

    println!("Seeding categories...");
    let repo = CategoryRepository::new(db);
    for name in categories {
        let (category, created) = repo.ensure(name).await?;
        if created {
            println!("  Created category {}: {}", category.id, category.name);
        } else {
            println!("  Category {} already exists, skipping...", category.name);
        }
    }

    println!("Seeding complete!");
    Ok(())
}
