//! Error types for the account API client.

use thiserror::Error;

/// Result type for account API operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Account API client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection refused, reset, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response). `detail` is the server's message when the
    /// body carried one.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Parse error (body was not JSON, or not the expected shape)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_BASE_URL must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("API_TIMEOUT_SECS must be a positive number of seconds, got '{0}'")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
