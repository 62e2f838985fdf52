//! Ports
//!
//! Trait definitions for the external dependencies of the feed service:
//! the upstream Graph API and the clock.

pub mod clock;
pub mod graph;

pub use clock::{Clock, SystemClock};
pub use graph::{GraphClient, GraphCursors, GraphFeedResponse, GraphPaging};
