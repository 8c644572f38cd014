//! Bird persistence layer
//!
//! # Design Principles
//!
//! - Handlers depend on the `BirdStore` trait, never on a driver
//! - The active implementation is injected at startup - no global store
//! - Postgres in production, in-memory for tests

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::Bird;

pub use memory::MemoryBirdStore;
pub use postgres::PgBirdStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Insert failed in the backing engine
    #[error("bird insert failed: {0}")]
    Write(#[source] sqlx::Error),

    /// Query or row mapping failed; partial results are discarded
    #[error("bird query failed: {0}")]
    Read(#[source] sqlx::Error),

    /// The backing engine could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence capability for bird records.
#[async_trait]
pub trait BirdStore: Send + Sync + 'static {
    /// Insert the record's fields as a new row.
    ///
    /// No generated identifier is returned and no side effect occurs
    /// beyond the row insertion.
    async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError>;

    /// All rows currently in the table, mapped to records.
    ///
    /// Order is whatever the backing engine returns; callers must not
    /// rely on it.
    async fn get_birds(&self) -> Result<Vec<Bird>, StoreError>;
}
