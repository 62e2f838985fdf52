//! Media classification
//!
//! Maps a post's first attachment onto one of seven mutually exclusive
//! rendering variants. Evaluation order is significant: a share with
//! both an external link and a cover image renders as a thumbnail, not a
//! notice.

use regex::Regex;

use crate::domain::entities::Post;

/// How a post's media should be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaVariant {
    /// Natively hosted video with a direct source URL
    NativeVideo { source: String },
    /// Embedded YouTube player
    YouTubeEmbed { video_id: String },
    /// Embedded Vimeo player
    VimeoEmbed { video_id: String },
    /// Cover image linking out to the external video
    VideoThumbnail { picture: String, link: String },
    /// Text notice pointing at the post permalink
    VideoNotice,
    /// Plain cover image
    Image { picture: String },
    /// No media at all
    None,
}

/// Classify a post's attachment into its rendering variant.
///
/// Total over every attachment shape; unrecognized combinations fall
/// through to `MediaVariant::None`.
pub fn classify(post: &Post) -> MediaVariant {
    let attachment = post.first_attachment();
    let attachment_url = attachment.and_then(|a| a.url.as_deref()).unwrap_or("");
    let attachment_kind = attachment.map(|a| a.kind.as_str()).unwrap_or("");

    if let Some(source) = attachment
        .and_then(|a| a.media.as_ref())
        .and_then(|m| m.source.as_ref())
    {
        return MediaVariant::NativeVideo {
            source: source.clone(),
        };
    }

    if let Some(video_id) = extract_youtube_id(attachment_url) {
        return MediaVariant::YouTubeEmbed { video_id };
    }

    if let Some(video_id) = extract_vimeo_id(attachment_url) {
        return MediaVariant::VimeoEmbed { video_id };
    }

    let video_like = attachment_kind.contains("video") || attachment_kind == "share";
    if video_like && !attachment_url.is_empty() {
        if let Some(picture) = &post.full_picture {
            return MediaVariant::VideoThumbnail {
                picture: picture.clone(),
                link: attachment_url.to_string(),
            };
        }
    }

    if attachment_kind == "native_templates"
        || attachment_kind.contains("video")
        || (attachment_kind == "share" && post.full_picture.is_none())
    {
        return MediaVariant::VideoNotice;
    }

    if let Some(picture) = &post.full_picture {
        return MediaVariant::Image {
            picture: picture.clone(),
        };
    }

    MediaVariant::None
}

/// Extract a YouTube video id from a watch, short, or embed URL.
/// Patterns are tried in order; the first match wins.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    first_capture(
        url,
        &[
            r"youtube\.com/watch\?v=([^&]+)",
            r"youtu\.be/([^?]+)",
            r"youtube\.com/embed/([^?]+)",
        ],
    )
}

/// Extract a Vimeo video id from a page or player URL
pub fn extract_vimeo_id(url: &str) -> Option<String> {
    first_capture(
        url,
        &[r"vimeo\.com/(\d+)", r"player\.vimeo\.com/video/(\d+)"],
    )
}

fn first_capture(url: &str, patterns: &[&str]) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    for pattern in patterns {
        let re = Regex::new(pattern).unwrap();
        if let Some(caps) = re.captures(url) {
            return caps.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}
