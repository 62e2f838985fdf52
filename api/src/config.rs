use std::env;

#[derive(Clone)]
pub struct Config {
    /// Facebook page whose posts are proxied
    pub page_id: Option<String>,
    /// Static Graph API access token
    pub access_token: Option<String>,
    /// Graph API base URL (overridable for staging)
    pub graph_base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            page_id: env::var("FACEBOOK_PAGE_ID").ok(),
            access_token: env::var("FACEBOOK_ACCESS_TOKEN").ok(),
            graph_base_url: env::var("FACEBOOK_GRAPH_BASE")
                .unwrap_or_else(|_| "https://graph.facebook.com/v18.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Credential pair handed to the feed service. Absence is checked at
    /// fetch time, not at boot, so the server still starts (and reports a
    /// configuration error per request) without them.
    pub fn credentials(&self) -> FeedCredentials {
        FeedCredentials {
            page_id: self.page_id.clone(),
            access_token: self.access_token.clone(),
        }
    }
}

/// The credentials the fetcher needs for every upstream call
#[derive(Clone, Default)]
pub struct FeedCredentials {
    pub page_id: Option<String>,
    pub access_token: Option<String>,
}
