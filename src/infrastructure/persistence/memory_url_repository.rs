//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::domain::repositories::{StoreError, UrlRepository};

/// Process-local repository backed by a [`DashMap`].
///
/// `DashMap` shards the map behind reader/writer locks, so concurrent request
/// handlers can read and write without a global lock. Nothing survives a
/// restart. Saving an existing key replaces its URL.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    storage: DashMap<String, String>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save(&self, key: &str, long_url: &str) -> Result<(), StoreError> {
        if let Some(previous) = self.storage.insert(key.to_owned(), long_url.to_owned())
            && previous != long_url
        {
            debug!(key, previous = %previous, "Overwriting existing mapping");
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.storage
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
