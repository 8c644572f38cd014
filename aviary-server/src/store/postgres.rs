//! Postgres-backed bird store

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BirdStore, StoreError};
use crate::models::Bird;

/// Bird store over a pre-existing `birds(species text, description text)`
/// table. No migrations are run here.
#[derive(Clone)]
pub struct PgBirdStore {
    pool: PgPool,
}

impl PgBirdStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BirdStore for PgBirdStore {
    async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO birds (species, description) VALUES ($1, $2)")
            .bind(&bird.species)
            .bind(&bird.description)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        Ok(())
    }

    async fn get_birds(&self) -> Result<Vec<Bird>, StoreError> {
        // No ORDER BY: rows come back in engine order.
        sqlx::query_as::<_, Bird>("SELECT species, description FROM birds")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Read)
    }
}
