//! Widget engine
//!
//! Server-side counterpart of the embeddable feed widget: media
//! classification, HTML rendering, and the pagination state machines.

pub mod media;
pub mod pager;
pub mod renderer;

pub use media::{classify, MediaVariant};
pub use pager::{FeedPager, PageSource, StaticPager};
pub use renderer::{render_page, render_post};
