//! Unified error types for the pagefeed API
//!
//! This module defines error types for each layer:
//! - `GraphError`: upstream Graph API client errors
//! - `AppError`: application layer errors (wraps client errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Graph API client errors
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success upstream status; carries the response body as context
    #[error("Graph API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Upstream body did not match the expected response shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Required credentials are missing; detected before any upstream
    /// call and never retried
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error",
                    Some(msg.clone()),
                )
            }
            AppError::Graph(e) => {
                tracing::error!("Graph error: {}", e);
                match e {
                    GraphError::Api { body, .. } => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Feed API error",
                        Some(body.clone()),
                    ),
                    GraphError::Malformed(msg) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Feed API error",
                        Some(msg.clone()),
                    ),
                    GraphError::Request(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "Feed API error", None)
                    }
                }
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
