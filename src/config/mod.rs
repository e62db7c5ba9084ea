/// Configuration management for the Tablon backend
///
/// Handles server binding, database location, and SMTP delivery parameters.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Outbound email configuration
    pub email: EmailConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (created if missing)
    pub path: String,
}

/// SMTP configuration for approval notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay hostname
    pub smtp_server: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// SMTP username
    pub smtp_user: String,
    /// SMTP password
    pub smtp_pass: String,
    /// Sender address for all outbound mail
    pub from_address: String,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("TABLON_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("TABLON_PORT")
                    .unwrap_or_else(|_| "3008".to_string())
                    .parse()
                    .unwrap_or(3008),
            },
            database: DatabaseConfig {
                path: std::env::var("TABLON_DB_PATH")
                    .unwrap_or_else(|_| "data/tablon.db".to_string()),
            },
            email: EmailConfig {
                smtp_server: std::env::var("TABLON_SMTP_SERVER")
                    .unwrap_or_else(|_| "localhost".to_string()),
                smtp_port: std::env::var("TABLON_SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .unwrap_or(587),
                smtp_user: std::env::var("TABLON_SMTP_USER").unwrap_or_default(),
                smtp_pass: std::env::var("TABLON_SMTP_PASS").unwrap_or_default(),
                from_address: std::env::var("TABLON_FROM_ADDRESS")
                    .unwrap_or_else(|_| "moderacion@tablon.local".to_string()),
            },
        }
    }
}
