/// Tablon: moderation backend for user-submitted publications
///
/// Main entry point. Initializes configuration and starts the HTTP server
/// with the moderation workflow endpoints.

use tablon::{config::Config, server::start_server};

/// Application entry point
///
/// Initializes the server with default configuration and starts listening
/// for requests. The server provides:
/// - Moderation API at /api/publicaciones/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3008 and a local SQLite file)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
