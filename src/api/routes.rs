//! API route configuration.

use crate::api::handlers::{hello_handler, resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET  /hello`                - API greeting
/// - `POST /shorturl/new`         - Create a short URL (form field `url`)
/// - `GET  /shorturl/{shorturl}`  - Redirect a short token to its original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/shorturl/new", post(shorten_handler))
        .route("/shorturl/{shorturl}", get(resolve_handler))
}
