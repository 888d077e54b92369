//! Utility functions for token generation and hostname resolution.
//!
//! - [`token_generator`] - Short token generation
//! - [`dns`] - Best-effort hostname resolution for submitted URLs

pub mod dns;
pub mod token_generator;
