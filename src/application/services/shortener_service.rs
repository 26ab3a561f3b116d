//! Short link creation and resolution service.

use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::ShortenerError;
use crate::utils::key_generator::generate_key;
use crate::utils::url_validator::is_valid_url;

/// Service for shortening URLs and expanding short keys.
///
/// Keys are derived from the URL itself (see
/// [`crate::utils::key_generator`]), so shortening the same URL twice yields
/// the same short URL without a lookup.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
}

impl ShortenerService {
    /// Creates a new shortener service.
    ///
    /// A trailing `/` on `base_url` is dropped so short URLs never contain `//`.
    pub fn new(repository: Arc<dyn UrlRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            repository,
            base_url,
        }
    }

    /// Validates `long_url`, stores it under its generated key and returns the
    /// short URL.
    ///
    /// Store failures are returned unchanged and never retried. The one
    /// exception is a [`StoreError::DuplicateKey`] for a key that already maps
    /// to exactly `long_url`: that is a re-submission, not a collision, and it
    /// succeeds with the same short URL.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::InvalidUrl`] if `long_url` has no scheme or host.
    /// Returns [`ShortenerError::Store`] if the repository fails, including a
    /// key collision between two different URLs.
    pub async fn shorten(&self, long_url: &str) -> Result<String, ShortenerError> {
        if !is_valid_url(long_url) {
            return Err(ShortenerError::InvalidUrl(long_url.to_string()));
        }

        let key = generate_key(long_url);

        if let Err(err) = self.repository.save(&key, long_url).await {
            let resubmitted = matches!(err, StoreError::DuplicateKey(_))
                && self.stored_url_matches(&key, long_url).await;

            if !resubmitted {
                return Err(err.into());
            }

            debug!(key = %key, "URL already stored under its key");
        }

        Ok(self.short_url(&key))
    }

    /// Returns the long URL stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if nothing is stored under `key`.
    /// Returns [`ShortenerError::Store`] on other repository failures.
    pub async fn expand(&self, key: &str) -> Result<String, ShortenerError> {
        Ok(self.repository.get(key).await?)
    }

    /// Builds the full short URL for a key.
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    /// Reports whether the underlying repository is reachable.
    pub async fn is_storage_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    async fn stored_url_matches(&self, key: &str, long_url: &str) -> bool {
        self.repository
            .get(key)
            .await
            .is_ok_and(|stored| stored == long_url)
    }
}
