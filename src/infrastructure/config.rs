//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL for finished characters
    pub database_url: String,

    /// HTTP server port
    pub server_port: u16,

    /// Simulated equipment catalog latency in milliseconds
    pub catalog_latency_ms: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("CHARFORGE_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://charforge.db?mode=rwc".to_string()),

            server_port: env::var("CHARFORGE_SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("CHARFORGE_SERVER_PORT must be a valid port number")?,

            catalog_latency_ms: env::var("CHARFORGE_CATALOG_LATENCY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .context("CHARFORGE_CATALOG_LATENCY_MS must be a whole number of milliseconds")?,
        })
    }
}
