//! Delegate URL composition.

use askama::Template;

use crate::domain::{Mode, ScheduleQuery};

use super::error::RatpError;

/// Upstream request URL for the "next trains" page.
///
/// Values are substituted verbatim; the `txt` extension disables escaping.
#[derive(Debug, Template)]
#[template(
    source = "{{ base_url }}/siv/schedule?service=next&reseau={{ mode }}&lineid={{ line }}&directionsens={{ direction }}&stationname={{ station }}",
    ext = "txt"
)]
pub struct DelegateUrl<'a> {
    base_url: &'a str,
    mode: Mode,
    line: &'a str,
    direction: &'a str,
    station: &'a str,
}

impl<'a> DelegateUrl<'a> {
    pub fn new(base_url: &'a str, query: &'a ScheduleQuery) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
            mode: query.mode(),
            line: query.line(),
            direction: query.direction(),
            station: query.station(),
        }
    }

    /// Render the full URL.
    pub fn compose(&self) -> Result<String, RatpError> {
        Ok(self.render()?)
    }
}
