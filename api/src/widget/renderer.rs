//! Widget renderer
//!
//! Renders posts to embeddable HTML fragments. Every post-derived text
//! and attribute value passes through `escape_html` before it is
//! interpolated into markup.

use chrono::DateTime;

use crate::domain::entities::Post;
use crate::widget::media::{classify, MediaVariant};

const PLAY_ICON: &str = "<svg class=\"feed-play-icon\" viewBox=\"0 0 24 24\" fill=\"currentColor\"><path d=\"M8 5v14l11-7z\"/></svg>";

const VIDEO_ICON: &str = "<svg class=\"feed-video-notice-icon\" viewBox=\"0 0 24 24\" fill=\"currentColor\"><path d=\"M17 10.5V7c0-.55-.45-1-1-1H4c-.55 0-1 .45-1 1v10c0 .55.45 1 1 1h12c.55 0 1-.45 1-1v-3.5l4 4v-11l-4 4z\"/></svg>";

/// Render a full feed page fragment
pub fn render_page(posts: &[Post], locale: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<div class=\"feed-container\">");
    for post in posts {
        buf.push_str(&render_post(post, locale));
    }
    buf.push_str("</div>");

    buf
}

/// Render a single post: date, optional message, media, permalink
pub fn render_post(post: &Post, locale: &str) -> String {
    let mut buf = String::new();

    buf.push_str("<article class=\"feed-post\">");
    buf.push_str(&format!(
        "<time class=\"feed-date\" datetime=\"{}\">{}</time>",
        escape_html(&post.created_time),
        escape_html(&format_date(&post.created_time)),
    ));

    if let Some(message) = &post.message {
        buf.push_str(&format!(
            "<p class=\"feed-message\">{}</p>",
            escape_html(message)
        ));
    }

    buf.push_str(&render_media(post, locale));

    buf.push_str(&format!(
        "<a class=\"feed-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View on Facebook</a>",
        escape_html(&post.permalink_url)
    ));
    buf.push_str("</article>");

    buf
}

/// Render the media fragment for a post's classified variant
pub fn render_media(post: &Post, locale: &str) -> String {
    match classify(post) {
        MediaVariant::NativeVideo { source } => format!(
            "<video class=\"feed-video\" controls playsinline preload=\"metadata\"><source src=\"{}\" type=\"video/mp4\"></video>",
            escape_html(&source)
        ),
        MediaVariant::YouTubeEmbed { video_id } => format!(
            "<div class=\"feed-video-container\"><iframe class=\"feed-video-embed\" src=\"https://www.youtube.com/embed/{}\" frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen></iframe></div>",
            escape_html(&video_id)
        ),
        MediaVariant::VimeoEmbed { video_id } => format!(
            "<div class=\"feed-video-container\"><iframe class=\"feed-video-embed\" src=\"https://player.vimeo.com/video/{}\" frameborder=\"0\" allow=\"autoplay; fullscreen; picture-in-picture\" allowfullscreen></iframe></div>",
            escape_html(&video_id)
        ),
        MediaVariant::VideoThumbnail { picture, link } => format!(
            "<a class=\"feed-video-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\"><div class=\"feed-video-thumbnail\"><img class=\"feed-image\" src=\"{}\" alt=\"\" loading=\"lazy\"><div class=\"feed-play-overlay\">{}</div></div></a>",
            escape_html(&link),
            escape_html(&picture),
            PLAY_ICON,
        ),
        MediaVariant::VideoNotice => format!(
            "<a class=\"feed-video-notice\" href=\"{}\" target=\"_blank\" rel=\"noopener\">{}<span class=\"feed-video-notice-text\">{}</span></a>",
            escape_html(&post.permalink_url),
            VIDEO_ICON,
            video_notice_text(locale),
        ),
        MediaVariant::Image { picture } => format!(
            "<img class=\"feed-image\" src=\"{}\" alt=\"\" loading=\"lazy\">",
            escape_html(&picture)
        ),
        MediaVariant::None => String::new(),
    }
}

/// Notice text for posts whose video only plays on Facebook
pub fn video_notice_text(locale: &str) -> &'static str {
    if locale.to_lowercase().starts_with("da") {
        "Video tilgængelig på Facebook"
    } else {
        "Video available on Facebook"
    }
}

/// Format an ISO-8601 timestamp as a long date. The Graph API emits
/// offsets without a colon, which RFC 3339 parsing rejects, so both
/// forms are tried; the raw string passes through when neither parses.
fn format_date(iso: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(iso)
        .or_else(|_| DateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%z"));
    match parsed {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Escape text for safe embedding in markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
