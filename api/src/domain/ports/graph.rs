//! Graph API client port
//!
//! Defines the interface for fetching posts from the upstream feed API,
//! plus the raw response shapes exactly as the Graph API returns them.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::Post;
use crate::error::GraphError;

/// Raw posts response from the Graph API, before normalization.
/// A missing `data` array deserializes as no posts.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFeedResponse {
    #[serde(default)]
    pub data: Vec<Post>,
    pub paging: Option<GraphPaging>,
}

/// Raw paging block; `next` being present signals that another page
/// exists
#[derive(Debug, Clone, Deserialize)]
pub struct GraphPaging {
    pub cursors: Option<GraphCursors>,
    pub next: Option<String>,
}

/// Opaque pagination cursors
#[derive(Debug, Clone, Deserialize)]
pub struct GraphCursors {
    pub after: Option<String>,
}

/// Client for the upstream posts endpoint
#[async_trait]
pub trait GraphClient: Send + Sync + 'static {
    /// Fetch one page of posts for `page_id`. `cursor` is omitted from
    /// the request on the first page.
    async fn fetch_posts(
        &self,
        page_id: &str,
        access_token: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<GraphFeedResponse, GraphError>;
}
