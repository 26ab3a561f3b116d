mod common;

use serde_json::json;

#[tokio::test]
async fn test_expand_after_shorten() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/3NBE4XK").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com");
}

#[tokio::test]
async fn test_expand_uses_last_path_segment() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://rust-lang.org" }))
        .await
        .assert_status_ok();

    let response = server.get("/any/prefix/ELZ9ORJ").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://rust-lang.org");
}

#[tokio::test]
async fn test_expand_round_trip_via_returned_short_url() {
    let server = common::create_test_server(common::create_test_state());

    let short_url = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a?b=c#d" }))
        .await
        .json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let path = short_url.trim_start_matches(common::BASE_URL);
    let response = server.get(path).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com/a?b=c#d");
}

#[tokio::test]
async fn test_expand_unknown_key() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/zzzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["key"], "zzzzzzz");
}

#[tokio::test]
async fn test_expand_root_path_has_no_key() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_expand_trailing_slash_has_no_key() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/3NBE4XK/").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_expand_percent_encoded_key() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server.get("/3NBE4X%4B").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["long_url"], "https://example.com");
}

#[tokio::test]
async fn test_expand_encoded_slash_splits_segments() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    server.get("/prefix%2F3NBE4XK").await.assert_status_ok();
}

#[tokio::test]
async fn test_expand_invalid_utf8_path() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/%FF%FE").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}
