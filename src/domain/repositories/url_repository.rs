//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL store.
///
/// The store exposes insert and two lookups; mappings are never updated or
/// deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WriteFailed`] with the driver message if the
    /// insert is rejected.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_token(&self, token: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds every mapping for an original long URL.
    ///
    /// Used only as a pre-insert existence check. The result can hold more
    /// than one row: duplicate submissions racing past the check are allowed
    /// by the storage layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Vec<UrlMapping>, AppError>;
}
