//! API error type.
//!
//! Every adapter failure is caught at this boundary and mapped to a 500
//! response with body `{"error": <message>}`. The upstream failure message
//! is relayed verbatim — this service's contract is to surface whatever
//! GitHub said, not to classify it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use boxstore_github::RemoteStoreError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The storage backend failed. Carries the adapter's message verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl From<RemoteStoreError> for ApiError {
    fn from(err: RemoteStoreError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Upstream(message) = self;
        tracing::error!(error = %message, "request failed against remote store");

        let body = ErrorBody { error: message };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
