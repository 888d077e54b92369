//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`          - Static landing page
//! - `/api/*`         - JSON API (hello, shorten, resolve)
//! - `/public/*`      - Static asset passthrough
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, applied to all routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("views/index.html"))
        .nest_service("/public", ServeDir::new("public"))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
