//! Graph API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::{GraphClient, GraphFeedResponse};
use crate::error::GraphError;

/// Fields requested for every post
const POST_FIELDS: &str =
    "id,message,created_time,full_picture,permalink_url,attachments{type,media{image,source},url}";

/// Upstream request deadline; a hung Graph API must not stall callers
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Implementation of the Graph API client
pub struct GraphClientImpl {
    http: Client,
    base_url: String,
}

impl GraphClientImpl {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<GraphFeedResponse, GraphError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| GraphError::Malformed(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(GraphError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl GraphClient for GraphClientImpl {
    async fn fetch_posts(
        &self,
        page_id: &str,
        access_token: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<GraphFeedResponse, GraphError> {
        let mut url = format!(
            "{}/{}/posts?fields={}&limit={}&access_token={}",
            self.base_url,
            encode(page_id),
            POST_FIELDS,
            limit,
            encode(access_token),
        );

        if let Some(cursor) = cursor {
            url.push_str(&format!("&after={}", encode(cursor)));
        }

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }
}
