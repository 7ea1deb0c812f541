use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure raised by a music catalog while serving a delegated call.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Upstream(String),
}

/// What a handler can answer with besides the upstream payload.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Delegated(#[from] CatalogError),

    #[error("upstream call timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Delegated(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({"error": self.to_string()})),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
