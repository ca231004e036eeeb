//! RATP client error types.

/// Errors from composing or performing an upstream request.
#[derive(Debug, thiserror::Error)]
pub enum RatpError {
    /// Rendering the delegate URL template failed
    #[error("{0}")]
    Template(#[from] askama::Error),

    /// HTTP request failed (connection error, unreadable body, etc.)
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}
