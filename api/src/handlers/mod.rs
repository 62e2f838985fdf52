//! HTTP handlers
//!
//! Axum request handlers for the proxy endpoints.

pub mod feed;

pub use feed::get_feed;
