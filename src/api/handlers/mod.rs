//! HTTP request handlers for API endpoints.

pub mod hello;
pub mod resolve;
pub mod shorten;

pub use hello::hello_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
