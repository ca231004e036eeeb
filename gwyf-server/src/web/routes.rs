//! HTTP route handlers.

use std::time::Instant;

use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::debug;

use crate::domain::{ScheduleQuery, ScheduleResult};

use super::encode::encode_result;
use super::error::ProxyError;
use super::state::AppState;

/// Query parameter enabling indented output. Its value is ignored.
const PRETTY_PARAM: &str = "pretty";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(schedule))
        .route("/health", get(health))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next trains at a station, as JSON.
async fn schedule(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ProxyError> {
    let body = next_trains(&state, &params).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}

/// Run the whole pipeline for one request and return the encoded JSON.
///
/// Stages run in order and the first failure aborts the request:
/// build query, compose URL, fetch, extract, encode.
pub async fn next_trains(
    state: &AppState,
    params: &[(String, String)],
) -> Result<Vec<u8>, ProxyError> {
    let query = ScheduleQuery::from_params(params)?;
    let url = state
        .ratp
        .delegate_url(&query)
        .map_err(ProxyError::DelegateUrl)?;

    let started = Instant::now();
    let page = state.ratp.fetch(&url).await.map_err(ProxyError::Upstream)?;
    let delegate_duration_secs = started.elapsed().as_secs_f64();

    let trains = state.parser.parse(&page);
    debug!(
        line = query.line(),
        direction = query.direction(),
        station = query.station(),
        trains = trains.len(),
        delegate_duration_secs,
        "scraped RATP schedule"
    );

    let pretty = params.iter().any(|(key, _)| key == PRETTY_PARAM);
    let result = ScheduleResult::new(delegate_duration_secs, trains);
    Ok(encode_result(&result, pretty)?)
}
