//! In-memory bird store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BirdStore, StoreError};
use crate::models::Bird;

/// Bird store holding records in process memory.
///
/// Records live for the lifetime of the process; every operation succeeds.
#[derive(Default)]
pub struct MemoryBirdStore {
    birds: RwLock<Vec<Bird>>,
}

impl MemoryBirdStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BirdStore for MemoryBirdStore {
    async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError> {
        self.birds.write().await.push(bird.clone());
        Ok(())
    }

    async fn get_birds(&self) -> Result<Vec<Bird>, StoreError> {
        Ok(self.birds.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let store = MemoryBirdStore::new();
        assert!(store.get_birds().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_list_round_trip() {
        let store = MemoryBirdStore::new();
        let bird = Bird {
            species: "test species".to_string(),
            description: "test description".to_string(),
        };

        store.create_bird(&bird).await.unwrap();

        let birds = store.get_birds().await.unwrap();
        assert_eq!(birds, vec![bird]);
    }

    #[tokio::test]
    async fn duplicate_creates_grow_the_list() {
        let store = MemoryBirdStore::new();
        let bird = Bird {
            species: "magpie".to_string(),
            description: "corvid".to_string(),
        };

        store.create_bird(&bird).await.unwrap();
        store.create_bird(&bird).await.unwrap();

        assert_eq!(store.get_birds().await.unwrap().len(), 2);
    }
}
