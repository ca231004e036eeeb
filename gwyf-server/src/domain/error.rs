//! Query validation errors.

/// Errors raised while turning request parameters into a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A mandatory query parameter was absent or empty
    #[error("Missing mandatory parameter '{0}'")]
    MissingParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::MissingParameter("station");
        assert_eq!(err.to_string(), "Missing mandatory parameter 'station'");
    }
}
