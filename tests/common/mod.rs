#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::application::services::ShortenerService;
use url_shortener::config::StorageBackend;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    create_state_with(Arc::new(MemoryUrlRepository::new()), StorageBackend::Memory)
}

pub async fn create_pg_state(pool: PgPool) -> AppState {
    create_state_with(create_pg_repository(pool).await, StorageBackend::Postgres)
}

pub fn create_state_with(
    repository: Arc<dyn UrlRepository>,
    backend: StorageBackend,
) -> AppState {
    let shortener = Arc::new(ShortenerService::new(repository, BASE_URL));
    AppState::new(shortener, backend)
}

pub async fn create_pg_repository(pool: PgPool) -> Arc<PgUrlRepository> {
    Arc::new(PgUrlRepository::new(Arc::new(pool)).await.unwrap())
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}

pub async fn insert_mapping(pool: &PgPool, key: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_key, original_url) VALUES ($1, $2)")
        .bind(key)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}
