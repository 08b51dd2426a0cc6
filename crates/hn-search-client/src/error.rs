//! Search client errors

use thiserror::Error;

/// Everything that can go wrong while asking the search API for stories.
///
/// Callers in the application treat all variants the same way (a failed
/// fetch), the distinction exists for logging.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("search request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status code
    #[error("search service returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the JSON shape we expect
    #[error("failed to decode search response: {0}")]
    Decode(String),

    /// The HTTP client itself could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl SearchError {
    /// Short label for status messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::Client(_) => "client",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = SearchError::Status { status: 503 };
        assert_eq!(err.to_string(), "search service returned HTTP 503");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_decode_error_message() {
        let err = SearchError::Decode("missing field `hits`".to_string());
        assert!(err.to_string().contains("missing field `hits`"));
        assert_eq!(err.kind(), "decode");
    }
}
