use std::sync::Arc;

use crate::store::{MemoryStore, VenueStore};

/// Shared application state: the injected venue/user store
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VenueStore>,
}

impl AppState {
    /// Creates state over the given store
    pub fn new(store: Arc<dyn VenueStore>) -> Self {
        Self { store }
    }

    /// Creates state over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
