//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::domain::repositories::{StoreError, UrlRepository};
use crate::utils::db_error::is_unique_violation_on_key;

/// Table holding the mappings.
pub const TABLE_NAME: &str = "urls";

const TABLE_EXISTS_QUERY: &str = r#"
    SELECT EXISTS (
        SELECT 1
        FROM information_schema.tables
        WHERE table_schema = current_schema() AND table_name = $1
    )
"#;

const CREATE_TABLE_QUERY: &str = r#"
    CREATE TABLE IF NOT EXISTS urls (
        id SERIAL PRIMARY KEY,
        short_key VARCHAR(255) UNIQUE NOT NULL,
        original_url TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

/// PostgreSQL repository for short key → URL mappings.
///
/// Every call is a single statement on the pool; concurrency control is left
/// to the database.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates the repository, creating the `urls` table first if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the table check or creation fails.
    pub async fn new(pool: Arc<PgPool>) -> Result<Self, StoreError> {
        let repository = Self { pool };
        repository.ensure_table().await?;
        Ok(repository)
    }

    /// Checks for the `urls` table and creates it when absent.
    ///
    /// Safe to call any number of times.
    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let exists: bool = sqlx::query_scalar(TABLE_EXISTS_QUERY)
            .bind(TABLE_NAME)
            .fetch_one(self.pool.as_ref())
            .await?;

        if !exists {
            sqlx::query(CREATE_TABLE_QUERY)
                .execute(self.pool.as_ref())
                .await?;
            info!("Created table '{}'", TABLE_NAME);
        }

        Ok(())
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, key: &str, long_url: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO urls (short_key, original_url) VALUES ($1, $2)")
            .bind(key)
            .bind(long_url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_key(&e) {
                    StoreError::DuplicateKey(key.to_owned())
                } else {
                    StoreError::Backend(e)
                }
            })?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        sqlx::query_scalar("SELECT original_url FROM urls WHERE short_key = $1")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| StoreError::NotFound(key.to_owned()))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
