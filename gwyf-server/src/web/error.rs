//! Pipeline error type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domain::QueryError;
use crate::ratp::RatpError;

/// A request failure, tagged with the stage that failed.
///
/// Every stage maps to HTTP 500, including client mistakes such as a
/// missing parameter; existing clients rely on that status.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// A mandatory query parameter was missing
    #[error("Failed to build delegate URL: {0}")]
    Query(#[from] QueryError),

    /// The delegate URL template could not be rendered
    #[error("Failed to build delegate URL: {0}")]
    DelegateUrl(#[source] RatpError),

    /// The RATP service could not be reached or its body read
    #[error("Failed to query RATP service: {0}")]
    Upstream(#[source] RatpError),

    /// The result could not be serialized
    #[error("Failed to encode result to JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!("{message}");

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
