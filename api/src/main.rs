//! pagefeed API Server
//!
//! Proxies a Facebook page feed through a short-lived cache and renders
//! the embeddable widget markup server-side.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::Method, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod widget;

#[cfg(test)]
mod test_utils;


use adapters::GraphClientImpl;
use app::FeedService;
use config::Config;
use domain::ports::{Clock, GraphClient, SystemClock};

/// Application state shared across all handlers
pub struct AppState<C: GraphClient, K: Clock> {
    pub feed_service: Arc<FeedService<C, K>>,
}

impl<C: GraphClient, K: Clock> Clone for AppState<C, K> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. Generic over the state's ports so tests can drive
/// the real routes with mock implementations.
pub fn build_router<C: GraphClient, K: Clock>(state: AppState<C, K>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/feed", get(handlers::get_feed::<C, K>))
        // Widget embeds cross-origin, so the surface is open to any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pagefeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting pagefeed API...");

    let config = Config::from_env();
    if config.page_id.is_none() || config.access_token.is_none() {
        tracing::warn!("Facebook credentials not configured; feed requests will fail");
    }

    let graph_client = Arc::new(GraphClientImpl::new(config.graph_base_url.clone()));
    let feed_service = Arc::new(FeedService::new(
        graph_client,
        Arc::new(SystemClock),
        config.credentials(),
    ));

    let state = AppState { feed_service };
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
