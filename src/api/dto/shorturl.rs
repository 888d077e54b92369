//! DTOs for the short URL endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// Form-encoded body of the create endpoint.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    /// The original URL to shorten, taken as-is.
    pub url: String,
}

/// Wire form of a persisted mapping.
///
/// The storage identifier is exposed as a string under `_id`; `created_at`
/// stays internal.
#[derive(Debug, Serialize)]
pub struct MappingResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub original_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id.to_string(),
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}
