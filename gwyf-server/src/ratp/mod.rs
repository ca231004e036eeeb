//! RATP WAP schedule service.
//!
//! The upstream only serves an HTML fragment meant for feature phones, so
//! this module covers the three steps needed to consume it:
//! - render the request URL from a [`ScheduleQuery`](crate::domain::ScheduleQuery)
//! - fetch the page body
//! - scrape the upcoming trains out of the markup with a fixed pattern
//!
//! A page that does not match the pattern yields no trains. Nothing here can
//! tell "no trains scheduled" apart from a changed page layout or an error page.

mod client;
mod error;
mod parse;
mod url;

pub use client::{DEFAULT_BASE_URL, RatpClient};
pub use error::RatpError;
pub use parse::{SCHEDULE_PATTERN, ScheduleParser};
pub use url::DelegateUrl;
