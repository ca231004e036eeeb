//! Arrival entries and the response payload.

use serde::Serialize;

/// One upcoming train as scraped from the upstream page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Train {
    /// Terminus the train is heading to
    pub destination: String,

    /// Mission code identifying the service run (e.g. "RERA")
    pub mission: String,

    /// Free-text status, e.g. "2 mn" or "à l'approche"
    pub stop: String,
}

/// Everything returned to the client for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    /// Wall-clock time spent waiting on the upstream, in seconds
    #[serde(rename = "duration_s")]
    pub delegate_duration_secs: f64,

    /// Trains in the order they appear on the upstream page
    pub incoming_trains: Vec<Train>,
}

impl ScheduleResult {
    pub fn new(delegate_duration_secs: f64, incoming_trains: Vec<Train>) -> Self {
        Self {
            delegate_duration_secs,
            incoming_trains,
        }
    }
}
