use std::sync::Arc;

use crate::domain::repositories::UrlRepository;

/// Shared application state injected into all handlers.
///
/// The URL store is an explicitly constructed handle whose lifetime is tied to
/// the server; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<dyn UrlRepository>,
}

impl AppState {
    pub fn new(urls: Arc<dyn UrlRepository>) -> Self {
        Self { urls }
    }
}
