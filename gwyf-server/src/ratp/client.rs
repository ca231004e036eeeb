//! RATP WAP HTTP client.
//!
//! Composes delegate URLs and fetches the raw schedule page. No timeout,
//! retry or status handling is layered on top of reqwest's defaults.

use tracing::warn;

use crate::domain::ScheduleQuery;

use super::error::RatpError;
use super::url::DelegateUrl;

/// Default base URL for the RATP WAP service.
pub const DEFAULT_BASE_URL: &str = "http://wap.ratp.fr";

/// Client for the RATP "next trains" WAP page.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RatpClient {
    http: reqwest::Client,
    base_url: String,
}

impl RatpClient {
    /// Create a client targeting `base_url` (see [`DEFAULT_BASE_URL`]).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RatpError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render the upstream URL for `query`.
    pub fn delegate_url(&self, query: &ScheduleQuery) -> Result<String, RatpError> {
        DelegateUrl::new(&self.base_url, query).compose()
    }

    /// GET `url` and return the whole body as text.
    ///
    /// Non-success statuses are logged but the body is still returned; an
    /// error page simply scrapes to zero trains.
    pub async fn fetch(&self, url: &str) -> Result<String, RatpError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(%status, url, "RATP service returned a non-OK status");
        }

        Ok(response.text().await?)
    }
}
