//! Application layer
//!
//! Orchestrates fetching, caching, and normalizing feed pages.

pub mod feed_cache;
pub mod feed_service;

pub use feed_cache::{FeedCache, FeedCacheKey};
pub use feed_service::FeedService;
