//! Handler for the hello endpoint.

use axum::Json;

use crate::api::dto::hello::Greeting;

/// Returns the API greeting.
///
/// # Endpoint
///
/// `GET /api/hello` → `{"greeting": "hello API"}`
pub async fn hello_handler() -> Json<Greeting> {
    Json(Greeting {
        greeting: "hello API".to_string(),
    })
}
