//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::config::StorageBackend;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub storage_backend: StorageBackend,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, storage_backend: StorageBackend) -> Self {
        Self {
            shortener,
            storage_backend,
        }
    }
}
