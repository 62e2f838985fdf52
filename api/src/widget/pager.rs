//! Pagination state machines
//!
//! `FeedPager` drives cursor-based loading against a `PageSource`;
//! `StaticPager` walks a pre-fetched post list with a visible-count
//! pointer. Both make repeated load requests idempotent once the feed is
//! exhausted.

use async_trait::async_trait;

use crate::domain::entities::{FeedPage, Post};
use crate::error::AppError;

/// Source of feed pages for the cursor-based pager
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn next_page(&self, cursor: Option<&str>, limit: u32) -> Result<FeedPage, AppError>;
}

/// A pending load produced by [`FeedPager::begin_load`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<String>,
}

/// Cursor-based pagination state
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPager {
    posts: Vec<Post>,
    cursor: Option<String>,
    has_more: bool,
    loading: bool,
}

impl Default for FeedPager {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedPager {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            cursor: None,
            has_more: true,
            loading: false,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a load. Returns `None` while a load is in flight or the
    /// feed is exhausted. The in-flight flag only suppresses duplicate
    /// starts; it cannot cancel a load already underway.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        Some(PageRequest {
            cursor: self.cursor.clone(),
        })
    }

    /// Apply a fetched page: append its posts, advance the cursor, and
    /// settle the loading flag.
    pub fn complete_load(&mut self, page: FeedPage) {
        self.posts.extend(page.posts);
        self.cursor = page.paging.next_cursor;
        self.has_more = page.paging.has_more;
        self.loading = false;
    }

    /// A failed load leaves everything as it was except that loading
    /// stops; the same load can be retried.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Fetch and apply the next page. Returns whether the pager advanced.
    pub async fn load_more<S: PageSource + ?Sized>(&mut self, source: &S, limit: u32) -> bool {
        let request = match self.begin_load() {
            Some(request) => request,
            None => return false,
        };

        match source.next_page(request.cursor.as_deref(), limit).await {
            Ok(page) => {
                self.complete_load(page);
                true
            }
            Err(e) => {
                tracing::warn!("Failed to load next feed page: {}", e);
                self.fail_load();
                false
            }
        }
    }
}

/// Visible-count pagination over a pre-fetched post list
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPager {
    posts: Vec<Post>,
    visible: usize,
    step: usize,
}

impl StaticPager {
    pub fn new(posts: Vec<Post>, limit: usize, step: usize) -> Self {
        let visible = limit.min(posts.len());
        Self {
            posts,
            visible,
            step: step.max(1),
        }
    }

    /// Parse a pre-generated post list (the static widget's feed file)
    pub fn from_json(json: &str, limit: usize, step: usize) -> Result<Self, serde_json::Error> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        Ok(Self::new(posts, limit, step))
    }

    pub fn visible_posts(&self) -> &[Post] {
        &self.posts[..self.visible]
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.posts.len()
    }

    /// Reveal the next step of posts; a no-op once everything is
    /// visible.
    pub fn show_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.visible = (self.visible + self.step).min(self.posts.len());
        true
    }
}
