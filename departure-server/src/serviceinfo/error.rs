//! Service-info client error types.

use tracing::Level;

/// Errors from the service-info HTTP client.
///
/// None of these reach feed consumers: [`super::ServiceInfoSource::lookup`]
/// logs them and reports "no enrichment data".
#[derive(Debug, thiserror::Error)]
pub enum ServiceInfoError {
    /// The request did not complete within the client timeout
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection, protocol or body transfer failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body is not valid service-info JSON
    #[error("invalid JSON ({body_len} bytes): {message}")]
    Json { message: String, body_len: usize },

    /// Anything else, such as an unusable URL
    #[error("{0}")]
    Other(String),
}

impl ServiceInfoError {
    /// Severity this error is logged at. Timeouts are expected now and then
    /// and rank below real failures.
    pub fn log_level(&self) -> Level {
        match self {
            ServiceInfoError::Timeout(_) => Level::WARN,
            _ => Level::ERROR,
        }
    }
}

impl From<reqwest::Error> for ServiceInfoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceInfoError::Timeout(err)
        } else if err.is_builder() {
            ServiceInfoError::Other(err.to_string())
        } else {
            ServiceInfoError::Http(err)
        }
    }
}
