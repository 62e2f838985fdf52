//! Time source port
//!
//! The feed cache compares capture timestamps against a TTL; injecting
//! the clock keeps expiry deterministic under test.

use chrono::{DateTime, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
