//! Schedule query built from request parameters.

use std::fmt;

use super::error::QueryError;

/// Transit network served by the upstream provider.
///
/// Only the RER network is supported; the mode is never taken from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Rer,
}

impl Mode {
    /// The value the upstream expects in its `reseau` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rer => "rer",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request for the next departures at a station.
///
/// Line, direction and station are passed through verbatim: the upstream
/// is the only authority on which codes are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleQuery {
    mode: Mode,
    line: String,
    direction: String,
    station: String,
}

impl ScheduleQuery {
    /// Build a query from decoded query-string pairs.
    ///
    /// When a key appears more than once only its first value is used.
    /// An empty value counts as missing.
    pub fn from_params(params: &[(String, String)]) -> Result<Self, QueryError> {
        let required = |key: &'static str| {
            first_value(params, key)
                .map(str::to_string)
                .ok_or(QueryError::MissingParameter(key))
        };

        // Checked in field order: line, direction, station.
        Ok(Self {
            mode: Mode::default(),
            line: required("line")?,
            direction: required("direction")?,
            station: required("station")?,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn station(&self) -> &str {
        &self.station
    }
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}
