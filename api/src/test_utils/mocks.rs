//! Mock implementations of port traits
//!
//! Hand-rolled, in-memory mocks configured per test. No macro magic; the
//! mocks record what they were asked so tests can verify behavior.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::FeedPage;
use crate::domain::ports::{Clock, GraphClient, GraphFeedResponse};
use crate::error::{AppError, GraphError};
use crate::widget::pager::PageSource;

// ============================================================================
// Mock Graph Client
// ============================================================================

/// Graph client returning a fixed response (or a fixed error) and
/// counting every upstream call
pub struct MockGraphClient {
    response: GraphFeedResponse,
    error: Option<(u16, String)>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(Option<String>, u32)>>,
}

impl Default for MockGraphClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGraphClient {
    pub fn new() -> Self {
        Self {
            response: GraphFeedResponse {
                data: vec![],
                paging: None,
            },
            error: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Respond to every fetch with `response`
    pub fn with_response(mut self, response: GraphFeedResponse) -> Self {
        self.response = response;
        self
    }

    /// Fail every fetch with an upstream API error
    pub fn with_error(mut self, status: u16, body: &str) -> Self {
        self.error = Some((status, body.to_string()));
        self
    }

    /// How many upstream calls were made
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (cursor, limit) pair of the most recent call
    pub fn last_request(&self) -> Option<(Option<String>, u32)> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphClient for MockGraphClient {
    async fn fetch_posts(
        &self,
        _page_id: &str,
        _access_token: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<GraphFeedResponse, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((cursor.map(str::to_string), limit));

        if let Some((status, body)) = &self.error {
            return Err(GraphError::Api {
                status: *status,
                body: body.clone(),
            });
        }
        Ok(self.response.clone())
    }
}

// ============================================================================
// Manual Clock
// ============================================================================

/// Clock fixed at a settable instant
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.write().unwrap();
        *now = *now + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

// ============================================================================
// Mock Page Source
// ============================================================================

/// Scripted page source for pager tests: replays queued pages/failures
/// in order and records the cursor of every request
pub struct MockPageSource {
    script: Mutex<VecDeque<Option<FeedPage>>>,
    cursors: Mutex<Vec<Option<String>>>,
}

impl Default for MockPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPageSource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            cursors: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful page
    pub fn with_page(self, page: FeedPage) -> Self {
        self.script.lock().unwrap().push_back(Some(page));
        self
    }

    /// Queue a failure
    pub fn with_failure(self) -> Self {
        self.script.lock().unwrap().push_back(None);
        self
    }

    /// Cursors of every request made so far
    pub fn requested_cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn next_page(&self, cursor: Option<&str>, _limit: u32) -> Result<FeedPage, AppError> {
        self.cursors
            .lock()
            .unwrap()
            .push(cursor.map(str::to_string));

        match self.script.lock().unwrap().pop_front() {
            Some(Some(page)) => Ok(page),
            _ => Err(AppError::Graph(GraphError::Api {
                status: 500,
                body: "scripted failure".to_string(),
            })),
        }
    }
}
