//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: the mapping between a generated
//! short token and the original long URL.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
