#![allow(dead_code)]

use axum::Router;
use shorturl_service::infrastructure::persistence::PgUrlRepository;
use shorturl_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(PgUrlRepository::new(Arc::new(pool))))
}

/// API router only; the static routes serve files from the crate root.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .nest("/api", shorturl_service::api::routes::api_routes())
        .with_state(state)
}

pub async fn create_test_mapping(pool: &PgPool, original_url: &str, short_url: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (original_url, short_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(original_url)
    .bind(short_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_mappings(pool: &PgPool, original_url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE original_url = $1")
        .bind(original_url)
        .fetch_one(pool)
        .await
        .unwrap()
}
