//! Feed response cache
//!
//! Bounded in-memory cache of normalized feed pages keyed by
//! (cursor, limit). Entries expire lazily against a TTL supplied by the
//! caller; there is no sweep task. When the cache is full the entry with
//! the oldest capture timestamp is evicted to make room.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::FeedPage;

/// Key sentinel for the first page, which has no cursor
const FIRST_PAGE: &str = "first";

/// Cache key: one entry per requested (cursor, limit) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedCacheKey {
    cursor: String,
    limit: u32,
}

impl FeedCacheKey {
    pub fn new(cursor: Option<&str>, limit: u32) -> Self {
        Self {
            cursor: cursor.unwrap_or(FIRST_PAGE).to_string(),
            limit,
        }
    }
}

/// A captured page and the instant it was captured. Entries are replaced
/// wholesale, never mutated in place.
struct CacheEntry {
    page: FeedPage,
    cached_at: DateTime<Utc>,
}

/// Bounded page cache
pub struct FeedCache {
    entries: Mutex<HashMap<FeedCacheKey, CacheEntry>>,
    capacity: usize,
}

impl FeedCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// The cached page for `key`, provided it is younger than `ttl`.
    /// Stale entries are treated as absent.
    pub fn get_fresh(
        &self,
        key: &FeedCacheKey,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Option<FeedPage> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|entry| now - entry.cached_at < ttl)
            .map(|entry| entry.page.clone())
    }

    /// Store `page` under `key`, unconditionally overwriting any prior
    /// entry. At capacity the oldest entry is dropped first.
    pub fn insert(&self, key: FeedCacheKey, page: FeedPage, now: DateTime<Utc>) {
        let mut entries = self.entries.lock().unwrap();

        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.cached_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }

        entries.insert(key, CacheEntry { page, cached_at: now });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
