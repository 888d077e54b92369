//! Application error taxonomy and HTTP rendering.
//!
//! The service keeps the legacy wire contract: every handler-level failure is
//! rendered as an HTTP 200 response whose body is `{"error": "<message>"}`.
//! Clients detect failure by the presence of the `error` field, not by the
//! status line.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Short token lookup miss.
    #[error("{message}")]
    NotFound { message: String },

    /// The submitted original URL already has a mapping.
    #[error("{message}")]
    AlreadyExists { message: String },

    /// The store rejected a write; carries the driver message.
    #[error("{message}")]
    WriteFailed { message: String },

    /// Any other database failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn write_failed(message: impl Into<String>) -> Self {
        Self::WriteFailed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Lookup miss for a short token.
    pub fn url_not_found() -> Self {
        Self::not_found("URL not found")
    }

    /// Duplicate original URL on submission.
    pub fn url_already_exists() -> Self {
        Self::already_exists("URL already exists")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::NotFound { message }
            | AppError::AlreadyExists { message }
            | AppError::WriteFailed { message }
            | AppError::Internal { message } => message,
        };

        // Failures share the 200 status line with successes; only the body
        // shape differs.
        (StatusCode::OK, Json(ErrorBody { error: message })).into_response()
    }
}

/// Read-path propagation: any sqlx failure that is not an explicit write
/// becomes a generic internal error.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {e}");
        AppError::internal("Database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_200_with_error_body() {
        let (status, json) = body_json(AppError::url_not_found()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "URL not found");
    }

    #[tokio::test]
    async fn test_already_exists_renders_200_with_error_body() {
        let (status, json) = body_json(AppError::url_already_exists()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "URL already exists");
    }

    #[tokio::test]
    async fn test_write_failed_carries_message() {
        let (status, json) = body_json(AppError::write_failed("disk full")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], "disk full");
    }

    #[test]
    fn test_display_matches_message() {
        assert_eq!(AppError::url_not_found().to_string(), "URL not found");
        assert_eq!(
            AppError::url_already_exists().to_string(),
            "URL already exists"
        );
    }
}
