//! UrlMapping entity: the stored association between a short token and its
//! original URL.

use chrono::{DateTime, Utc};

/// A persisted short-token mapping.
///
/// Created on successful submission, read on every resolve request, never
/// updated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(id: i64, original_url: String, short_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_url: String,
}
