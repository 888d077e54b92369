//! DTO for the hello endpoint.

use serde::Serialize;

/// Greeting response body.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub greeting: String,
}
