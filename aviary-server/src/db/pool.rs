//! Postgres connection pool

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Maximum connections for the pool.
/// Kept low for a single-table service.
const MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}
