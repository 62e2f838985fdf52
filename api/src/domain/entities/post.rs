//! Feed post entities
//!
//! Wire-shaped models for page posts. Field names follow the Graph API
//! JSON so the same types serve the upstream parse and the proxy
//! response.

use serde::{Deserialize, Serialize};

/// A single page post with its optional attachment payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// ISO-8601 creation timestamp, kept as the upstream string
    pub created_time: String,
    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_picture: Option<String>,
    pub permalink_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
}

impl Post {
    /// The post's single attachment descriptor, if any. The Graph API
    /// nests attachments in a list; only the first one matters for
    /// rendering.
    pub fn first_attachment(&self) -> Option<&Attachment> {
        self.attachments.as_ref().and_then(|a| a.data.first())
    }
}

/// Attachment envelope as returned by the Graph API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default)]
    pub data: Vec<Attachment>,
}

/// Media/link payload associated with a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Type tag, e.g. "video_inline", "share", "native_templates"
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<AttachmentMedia>,
    /// External link, used to detect YouTube/Vimeo shares
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Media block of an attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaImage>,
    /// Direct source URL for natively hosted video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Image reference inside an attachment media block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaImage {
    pub src: String,
}
