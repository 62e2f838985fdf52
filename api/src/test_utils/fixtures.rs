//! Test fixtures
//!
//! Factory functions for posts, pages, and raw Graph responses with
//! sensible defaults. Each fixture creates a valid value that tests can
//! customize.

use crate::domain::entities::{
    Attachment, AttachmentMedia, Attachments, FeedPage, Paging, Post,
};
use crate::domain::ports::{GraphCursors, GraphFeedResponse, GraphPaging};

/// A bare post with no message, picture, or attachment
pub fn test_post(id: &str) -> Post {
    Post {
        id: id.to_string(),
        message: None,
        created_time: "2024-01-01T00:00:00Z".to_string(),
        full_picture: None,
        permalink_url: format!("https://facebook.com/posts/{}", id),
        attachments: None,
    }
}

/// A post carrying a cover image
pub fn test_post_with_picture(id: &str) -> Post {
    Post {
        full_picture: Some(format!("https://cdn.example/{}.jpg", id)),
        ..test_post(id)
    }
}

/// Attach a single attachment descriptor to a post
pub fn with_attachment(mut post: Post, attachment: Attachment) -> Post {
    post.attachments = Some(Attachments {
        data: vec![attachment],
    });
    post
}

/// An attachment with only a type tag
pub fn test_attachment(kind: &str) -> Attachment {
    Attachment {
        kind: kind.to_string(),
        media: None,
        url: None,
    }
}

/// An attachment carrying an external link
pub fn attachment_with_url(kind: &str, url: &str) -> Attachment {
    Attachment {
        url: Some(url.to_string()),
        ..test_attachment(kind)
    }
}

/// An attachment carrying a direct video source
pub fn attachment_with_source(kind: &str, source: &str) -> Attachment {
    Attachment {
        media: Some(AttachmentMedia {
            image: None,
            source: Some(source.to_string()),
        }),
        ..test_attachment(kind)
    }
}

/// A normalized feed page
pub fn test_page(posts: Vec<Post>, next_cursor: Option<&str>, has_more: bool) -> FeedPage {
    FeedPage {
        posts,
        paging: Paging {
            next_cursor: next_cursor.map(str::to_string),
            has_more,
        },
    }
}

/// A raw Graph response; `has_next` controls whether a next-page link is
/// advertised
pub fn graph_response(
    posts: Vec<Post>,
    after: Option<&str>,
    has_next: bool,
) -> GraphFeedResponse {
    GraphFeedResponse {
        data: posts,
        paging: Some(GraphPaging {
            cursors: Some(GraphCursors {
                after: after.map(str::to_string),
            }),
            next: has_next.then(|| "https://graph.facebook.com/next".to_string()),
        }),
    }
}
