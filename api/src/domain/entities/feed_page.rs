//! Normalized feed pages

use serde::{Deserialize, Serialize};

use super::post::Post;

/// One page of the proxied feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub paging: Paging,
}

/// Pagination block; `next_cursor` serializes as `null` once the feed is
/// exhausted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    pub next_cursor: Option<String>,
    pub has_more: bool,
}
