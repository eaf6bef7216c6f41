use thiserror::Error;

/// Failures that a geographic lookup can produce.
///
/// `Clone` and `PartialEq` are required because lookup results travel
/// across the fetch channel and are stored in application state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status code.
    #[error("lookup service returned HTTP {0}")]
    Status(u16),
    /// The response body could not be decoded as the expected record list.
    #[error("invalid response payload: {0}")]
    InvalidPayload(String),
}

pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LookupError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            LookupError::Status(503).to_string(),
            "lookup service returned HTTP 503"
        );
        assert_eq!(
            LookupError::InvalidPayload("expected array".to_string()).to_string(),
            "invalid response payload: expected array"
        );
    }
}
