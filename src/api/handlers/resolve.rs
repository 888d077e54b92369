//! Handler for short token resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{shorturl}`
///
/// On a hit the response is a 302 Found pointing at the original URL; on a
/// miss the body is `{"error": "URL not found"}` with HTTP 200.
pub async fn resolve_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let mapping = state
        .urls
        .find_by_short_token(&token)
        .await?
        .ok_or_else(AppError::url_not_found)?;

    debug!("Redirecting {token} to {}", mapping.original_url);

    // Literal 302: axum's Redirect helpers only offer 303/307/308.
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    )
        .into_response())
}
