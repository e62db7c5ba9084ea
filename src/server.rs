/// Server setup and initialization
///
/// Wires together all components: store, notifier, moderation service, and
/// HTTP routes. Provides the main application factory function for creating
/// the Axum app.

use crate::{
    api::{create_publication_routes, AppState},
    config::Config,
    moderation::ModerationService,
    notify::EmailNotifier,
    publication::PublicationStore,
};
use anyhow::Result;
use axum::{routing::get, Router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Create the main Axum application with all routes
///
/// Opens the database, initializes the schema, and wires the store, SMTP
/// notifier, and moderation service into the router.
pub async fn create_app(config: Config) -> Result<Router> {
    // Ensure the database directory exists
    if let Some(parent) = Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create data directory '{}': {}", parent.display(), e)
            })?;
        }
    }

    tracing::info!("Opening publication database: {}", config.database.path);
    let options = SqliteConnectOptions::new()
        .filename(&config.database.path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    tracing::info!("Initializing publication store schema");
    let store = PublicationStore::new(pool);
    store
        .init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize schema: {}", e))?;

    tracing::info!("Initializing SMTP notifier ({})", config.email.smtp_server);
    let notifier = EmailNotifier::new(&config.email, store.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize notifier: {}", e))?;

    tracing::info!("Initializing moderation service");
    let service = Arc::new(ModerationService::new(store, Arc::new(notifier)));

    let app_state = AppState { service };

    let app = Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Moderation workflow routes
        .merge(create_publication_routes().with_state(app_state));

    tracing::info!("Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured
/// address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Tablon server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
