//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL mapping storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url, created_at
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert mapping: {e}");
            AppError::write_failed(e.to_string())
        })
    }

    async fn find_by_short_token(&self, token: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Vec<UrlMapping>, AppError> {
        let mappings = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, short_url, created_at
            FROM urls
            WHERE original_url = $1
            ORDER BY id
            "#,
        )
        .bind(original_url)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(mappings)
    }
}
