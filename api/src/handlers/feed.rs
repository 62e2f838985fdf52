//! Feed handler
//!
//! The proxy endpoint the widget talks to. Supports content negotiation:
//! Accept: text/html gets the feed rendered server-side, anything else
//! gets the JSON page.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domain::ports::{Clock, GraphClient};
use crate::error::AppError;
use crate::widget::renderer::render_page;
use crate::AppState;

/// Query params for GET /api/feed
#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub cursor: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Check if the client wants a rendered HTML fragment
fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false)
}

/// First Accept-Language tag, lowercased; empty when absent
fn request_locale(headers: &HeaderMap) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|tag| tag.split(';').next().unwrap_or(tag).trim().to_lowercase())
        .unwrap_or_default()
}

/// GET /api/feed
///
/// Returns one page of the proxied feed.
/// - Accept: text/html → rendered feed fragment
/// - Otherwise → JSON { posts, paging }
pub async fn get_feed<C: GraphClient, K: Clock>(
    State(state): State<AppState<C, K>>,
    Query(params): Query<FeedParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    if params.limit == 0 {
        return Err(AppError::BadRequest("limit must be at least 1".to_string()));
    }

    let page = state
        .feed_service
        .fetch_page(params.cursor.as_deref(), params.limit)
        .await?;

    if wants_html(&headers) {
        let locale = request_locale(&headers);
        Ok((
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_page(&page.posts, &locale),
        )
            .into_response())
    } else {
        Ok(Json(page).into_response())
    }
}
