//! Application state shared across handlers

use std::sync::Arc;

use crate::store::BirdStore;

/// Shared application state.
///
/// The store is injected once at startup, before serving begins, and only
/// read afterward.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn BirdStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BirdStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn BirdStore {
        self.store.as_ref()
    }
}
