use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let timeout = env::var("API_TIMEOUT_SECS").ok();

        Self::from_values(&base_url, timeout.as_deref())
    }

    /// Build a configuration from raw values, applying the same checks as
    /// [`ClientConfig::from_env`].
    pub fn from_values(base_url: &str, timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(base_url)?;

        let timeout = match timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(raw.to_string()));
                }
                Some(Duration::from_secs(secs))
            }
        };

        Ok(Self {
            api_base_url,
            timeout,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
