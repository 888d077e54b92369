mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_fresh_url_returns_mapping(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["original_url"], "https://example.com");

    let short_url = body["short_url"].as_str().unwrap();
    assert!(!short_url.is_empty());
    assert!(
        short_url
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );

    assert!(body["_id"].is_string());
    assert!(body.get("error").is_none());
}

#[sqlx::test]
async fn test_shorten_duplicate_url_returns_error(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let first = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "https://dedup.example.com" }))
        .await;
    first.assert_status_ok();

    let second = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "https://dedup.example.com" }))
        .await;

    // Failures share the 200 status line; the error field marks them.
    second.assert_status_ok();
    let body = second.json::<serde_json::Value>();
    assert_eq!(body["error"], "URL already exists");

    assert_eq!(
        common::count_mappings(&pool, "https://dedup.example.com").await,
        1
    );
}

#[sqlx::test]
async fn test_shorten_distinct_urls_get_distinct_tokens(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let first = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "https://example.com/1" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "https://example.com/2" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short_url"], second["short_url"]);
}

#[sqlx::test]
async fn test_shorten_accepts_unresolvable_input(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    // The DNS probe fails for this input; the request still succeeds.
    let response = server
        .post("/api/shorturl/new")
        .form(&json!({ "url": "not-even-a-url" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["original_url"], "not-even-a-url");
    assert!(body["short_url"].is_string());
}
