//! aviary-server: HTTP service for bird records
//!
//! Exposes create/list operations over a single `birds` table, serves a
//! static asset directory, and answers a greeting endpoint. Persistence is
//! polymorphic behind [`store::BirdStore`] so handlers never touch a
//! concrete driver.

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod store;

use std::path::PathBuf;

pub use http::{build_router, run_server, ApiError, ServerError};
pub use models::Bird;
pub use state::AppState;
pub use store::{BirdStore, MemoryBirdStore, PgBirdStore, StoreError};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Directory served under /assets
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/aviary".to_string()),
            assets_dir: PathBuf::from("./assets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.assets_dir, PathBuf::from("./assets"));
    }
}
