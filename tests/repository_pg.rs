mod common;

use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::application::services::ShortenerService;
use url_shortener::domain::repositories::{StoreError, UrlRepository};
use url_shortener::error::ShortenerError;
use url_shortener::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};

#[sqlx::test]
async fn test_new_creates_table(pool: PgPool) {
    common::create_pg_repository(pool.clone()).await;

    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM information_schema.tables \
         WHERE table_schema = current_schema() AND table_name = 'urls')",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(exists);
}

#[sqlx::test]
async fn test_new_is_idempotent(pool: PgPool) {
    let first = common::create_pg_repository(pool.clone()).await;
    first.save("3NBE4XK", "https://example.com").await.unwrap();

    let second = PgUrlRepository::new(Arc::new(pool)).await.unwrap();

    assert_eq!(
        second.get("3NBE4XK").await.unwrap(),
        "https://example.com"
    );
}

#[sqlx::test]
async fn test_save_and_get(pool: PgPool) {
    let repo = common::create_pg_repository(pool.clone()).await;

    repo.save("abc1234", "https://example.com/path?q=1")
        .await
        .unwrap();

    let url = repo.get("abc1234").await.unwrap();
    assert_eq!(url, "https://example.com/path?q=1");

    let has_timestamp: bool =
        sqlx::query_scalar("SELECT created_at IS NOT NULL FROM urls WHERE short_key = $1")
            .bind("abc1234")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(has_timestamp);
}

#[sqlx::test]
async fn test_get_not_found(pool: PgPool) {
    let repo = common::create_pg_repository(pool).await;

    let result = repo.get("missing").await;

    assert!(matches!(result, Err(StoreError::NotFound(key)) if key == "missing"));
}

#[sqlx::test]
async fn test_save_duplicate_key(pool: PgPool) {
    let repo = common::create_pg_repository(pool).await;

    repo.save("dup1234", "https://first.example").await.unwrap();
    let result = repo.save("dup1234", "https://second.example").await;

    assert!(matches!(result, Err(StoreError::DuplicateKey(key)) if key == "dup1234"));
    assert_eq!(repo.get("dup1234").await.unwrap(), "https://first.example");
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = common::create_pg_repository(pool.clone()).await;
    assert!(repo.health_check().await);

    pool.close().await;
    assert!(!repo.health_check().await);
}

#[sqlx::test]
async fn test_backends_produce_same_short_url(pool: PgPool) {
    let pg = ShortenerService::new(
        common::create_pg_repository(pool).await,
        common::BASE_URL,
    );
    let memory = ShortenerService::new(Arc::new(MemoryUrlRepository::new()), common::BASE_URL);

    for url in ["https://example.com", "ftp://x", "https://rust-lang.org"] {
        assert_eq!(
            pg.shorten(url).await.unwrap(),
            memory.shorten(url).await.unwrap()
        );
    }
}

#[sqlx::test]
async fn test_shorten_same_url_twice(pool: PgPool) {
    let service = ShortenerService::new(
        common::create_pg_repository(pool).await,
        common::BASE_URL,
    );

    let first = service.shorten("https://example.com").await.unwrap();
    let second = service.shorten("https://example.com").await.unwrap();

    assert_eq!(first, "http://localhost:8080/3NBE4XK");
    assert_eq!(first, second);
    assert_eq!(
        service.expand("3NBE4XK").await.unwrap(),
        "https://example.com"
    );
}

#[sqlx::test]
async fn test_shorten_key_taken_by_other_url(pool: PgPool) {
    let service = ShortenerService::new(
        common::create_pg_repository(pool.clone()).await,
        common::BASE_URL,
    );
    common::insert_mapping(&pool, "3NBE4XK", "https://other.example").await;

    let result = service.shorten("https://example.com").await;

    assert!(matches!(
        result,
        Err(ShortenerError::Store(StoreError::DuplicateKey(_)))
    ));
    assert_eq!(
        service.expand("3NBE4XK").await.unwrap(),
        "https://other.example"
    );
}

#[sqlx::test]
async fn test_http_round_trip_on_postgres(pool: PgPool) {
    let server = common::create_test_server(common::create_pg_state(pool).await);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a?b=c#d" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["short_url"],
        "http://localhost:8080/yzojypv"
    );

    let response = server.get("/yzojypv").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["long_url"],
        "https://example.com/a?b=c#d"
    );

    server.get("/zzzzzzz").await.assert_status_not_found();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["checks"]["storage"]["message"],
        "Backend: postgres"
    );
}
