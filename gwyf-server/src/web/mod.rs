//! Web layer for the schedule proxy.
//!
//! Serves the single JSON endpoint and maps pipeline failures to HTTP errors.

mod encode;
mod error;
mod routes;
mod state;


pub use encode::encode_result;
pub use error::ProxyError;
pub use routes::{create_router, next_trains};
pub use state::AppState;
