//! Feed service
//!
//! Fetches pages of posts from the Graph API and serves them out of a
//! short-lived cache. One instance owns the cache; handlers share it
//! through the app state.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::app::feed_cache::{FeedCache, FeedCacheKey};
use crate::config::FeedCredentials;
use crate::domain::entities::{FeedPage, Paging};
use crate::domain::ports::{Clock, GraphClient, GraphFeedResponse};
use crate::error::AppError;
use crate::widget::pager::PageSource;

/// Default freshness window for cached pages, in seconds
const DEFAULT_TTL_SECS: i64 = 600;

/// Bound on distinct (cursor, limit) entries kept at once
const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Service producing normalized feed pages
pub struct FeedService<C, K>
where
    C: GraphClient,
    K: Clock,
{
    graph: Arc<C>,
    clock: Arc<K>,
    cache: FeedCache,
    credentials: FeedCredentials,
    /// Fixed TTL for tests; `None` re-reads the environment per call
    ttl_override: Option<Duration>,
}

impl<C, K> FeedService<C, K>
where
    C: GraphClient,
    K: Clock,
{
    pub fn new(graph: Arc<C>, clock: Arc<K>, credentials: FeedCredentials) -> Self {
        Self {
            graph,
            clock,
            cache: FeedCache::new(DEFAULT_CACHE_CAPACITY),
            credentials,
            ttl_override: None,
        }
    }

    /// Pin the cache TTL instead of reading `FEED_CACHE_TTL_SECONDS`
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_override = Some(ttl);
        self
    }

    /// The TTL is resolved on every call so a running process observes
    /// configuration changes without a restart.
    fn cache_ttl(&self) -> Duration {
        if let Some(ttl) = self.ttl_override {
            return ttl;
        }
        let secs = env::var("FEED_CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);
        Duration::seconds(secs)
    }

    /// Fetch one page of the feed, serving from cache when fresh.
    ///
    /// The check-fetch-write sequence is not atomic: two concurrent calls
    /// for a cold key may both reach the Graph API, and the later write
    /// wins. The cache is an optimization, not a correctness mechanism.
    pub async fn fetch_page(
        &self,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<FeedPage, AppError> {
        let key = FeedCacheKey::new(cursor, limit);
        let now = self.clock.now();

        if let Some(page) = self.cache.get_fresh(&key, now, self.cache_ttl()) {
            return Ok(page);
        }

        let page_id = self
            .credentials
            .page_id
            .as_deref()
            .ok_or_else(|| AppError::Configuration("FACEBOOK_PAGE_ID is not set".to_string()))?;
        let access_token = self.credentials.access_token.as_deref().ok_or_else(|| {
            AppError::Configuration("FACEBOOK_ACCESS_TOKEN is not set".to_string())
        })?;

        let raw = self
            .graph
            .fetch_posts(page_id, access_token, cursor, limit)
            .await?;
        let page = normalize(raw);

        self.cache.insert(key, page.clone(), now);

        Ok(page)
    }
}

/// Normalize a raw Graph response into a feed page: a missing `data`
/// array becomes no posts, and `has_more` tracks whether the upstream
/// advertises a next page.
fn normalize(raw: GraphFeedResponse) -> FeedPage {
    let next_cursor = raw
        .paging
        .as_ref()
        .and_then(|p| p.cursors.as_ref())
        .and_then(|c| c.after.clone());
    let has_more = raw
        .paging
        .as_ref()
        .map(|p| p.next.is_some())
        .unwrap_or(false);

    FeedPage {
        posts: raw.data,
        paging: Paging {
            next_cursor,
            has_more,
        },
    }
}

#[async_trait]
impl<C, K> PageSource for FeedService<C, K>
where
    C: GraphClient,
    K: Clock,
{
    async fn next_page(&self, cursor: Option<&str>, limit: u32) -> Result<FeedPage, AppError> {
        self.fetch_page(cursor, limit).await
    }
}
