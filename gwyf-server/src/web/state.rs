//! Application state for the web layer.

use std::sync::Arc;

use crate::ratp::{RatpClient, ScheduleParser};

/// Shared application state.
///
/// Built once at startup and only ever read by request handlers.
#[derive(Clone)]
pub struct AppState {
    /// RATP WAP client
    pub ratp: Arc<RatpClient>,

    /// Compiled schedule pattern
    pub parser: Arc<ScheduleParser>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ratp: RatpClient, parser: ScheduleParser) -> Self {
        Self {
            ratp: Arc::new(ratp),
            parser: Arc::new(parser),
        }
    }
}
