//! Domain types for the schedule proxy.
//!
//! A request is turned into a [`ScheduleQuery`] exactly once; everything
//! downstream can trust that its fields are present and non-empty.

mod error;
mod query;
mod train;

pub use error::QueryError;
pub use query::{Mode, ScheduleQuery};
pub use train::{ScheduleResult, Train};
