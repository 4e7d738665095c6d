//! Bazaar API Server
//!
//! Main entry point for the Bazaar listing service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bazaar_api::{AppState, HttpOptions, create_router};
use bazaar_core::image::ImageStore;
use bazaar_db::{
    connect,
    migration::{Migrator, MigratorTrait},
};
use bazaar_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bazaar=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database).await?;
    info!(url = %config.database.url, "Connected to database");

    if config.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!("Database schema is up to date");
    }

    // Open image store
    tokio::fs::create_dir_all(&config.images.dir)
        .await
        .with_context(|| format!("Failed to create image directory {}", config.images.dir))?;
    let images = ImageStore::from_config((&config.images).into())?;
    if !images.has_default_image().await {
        warn!(
            dir = %config.images.dir,
            default_image = %config.images.default_image,
            "Default image is missing; requests for unknown images will fail"
        );
    }

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        images: Arc::new(images),
    };

    // Create router
    let options = HttpOptions::from_config(&config).context("Invalid front-end origin")?;
    info!(origin = %config.cors.front_url, "CORS origin configured");
    let app = create_router(state, &options);

    // Start server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
