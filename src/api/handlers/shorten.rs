//! Handler for short URL creation.

use axum::{Form, Json, extract::State};
use tracing::debug;

use crate::api::dto::shorturl::{MappingResponse, ShortenForm};
use crate::domain::entities::NewUrlMapping;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::{dns, token_generator};

/// Creates a short token for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl/new` with form field `url`.
///
/// # Request Flow
///
/// 1. Probe the raw submission against the resolver. The outcome is logged
///    and nothing more; the request proceeds either way.
/// 2. Reject when a mapping for the same original URL already exists.
/// 3. Generate a token, persist the mapping, return it.
///
/// The existence check and the insert are not transactional: two concurrent
/// submissions of the same URL can both pass the check and both insert.
///
/// # Errors
///
/// `{"error": "URL already exists"}` on a duplicate submission,
/// `{"error": "<message>"}` on a store write failure. Both carry HTTP 200.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Json<MappingResponse>, AppError> {
    let resolved = dns::resolve_host(&form.url).await;
    debug!("DNS probe for {:?}: resolved={resolved}", form.url);

    let existing = state.urls.find_by_original_url(&form.url).await?;
    if !existing.is_empty() {
        return Err(AppError::url_already_exists());
    }

    let token = token_generator::generate_token();

    let mapping = state
        .urls
        .insert(NewUrlMapping {
            original_url: form.url,
            short_url: token,
        })
        .await?;

    debug!("Created mapping {} -> {}", mapping.short_url, mapping.original_url);

    Ok(Json(mapping.into()))
}
