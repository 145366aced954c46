//! API error types and retryability classification.

use thiserror::Error;

/// Errors from talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success HTTP status.
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    /// The request did not complete in time.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The response body could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The backend answered 200 but flagged the operation as failed.
    #[error("Rejected by backend: {0}")]
    Rejected(String),

    /// Anything else reqwest reports.
    #[error("Request error: {0}")]
    Request(String),
}

impl ApiError {
    /// Whether retrying the same request can plausibly succeed.
    ///
    /// Server errors, throttling, timeouts, and connection failures are
    /// retryable; 4xx rejections and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http { status, .. } => (500..600).contains(status) || *status == 429,
            ApiError::Timeout(_) | ApiError::Connection(_) => true,
            ApiError::Deserialization(_) | ApiError::Rejected(_) | ApiError::Request(_) => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else if e.is_connect() {
            ApiError::Connection(e.to_string())
        } else if e.is_decode() {
            ApiError::Deserialization(e.to_string())
        } else {
            ApiError::Request(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = ApiError::Http {
            status: 503,
            url: "http://x/api/categories".into(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_throttling_is_retryable() {
        let err = ApiError::Http {
            status: 429,
            url: "http://x".into(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = ApiError::Http {
            status: 400,
            url: "http://x".into(),
        };
        assert!(!err.is_retryable());
        assert!(!ApiError::Rejected("bad".into()).is_retryable());
    }

    #[test]
    fn test_transport_failures_are_retryable() {
        assert!(ApiError::Timeout("t".into()).is_retryable());
        assert!(ApiError::Connection("c".into()).is_retryable());
    }
}
