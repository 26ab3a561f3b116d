//! Repository trait for short key → URL mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by [`UrlRepository`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No mapping exists for the key.
    #[error("no URL stored for key '{0}'")]
    NotFound(String),

    /// The key is already mapped. Only backends with a unique constraint
    /// report this; the in-memory store overwrites instead.
    #[error("short key '{0}' already exists")]
    DuplicateKey(String),

    /// Connectivity, I/O or any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(#[from] sqlx::Error),
}

/// Storage for short key → long URL mappings.
///
/// Both implementations must behave identically for `save` followed by `get`.
/// They differ only when a key is saved twice: callers must not assume either
/// overwrite or rejection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - Process-local map
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `long_url` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the backend enforces key
    /// uniqueness and `key` is taken.
    /// Returns [`StoreError::Backend`] on any other backend failure.
    async fn save(&self, key: &str, long_url: &str) -> Result<(), StoreError>;

    /// Returns the URL stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `key`.
    /// Returns [`StoreError::Backend`] on backend failures.
    async fn get(&self, key: &str) -> Result<String, StoreError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
