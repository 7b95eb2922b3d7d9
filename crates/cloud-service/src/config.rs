//! Configuration for the remote backend.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://api.symmetry.app";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Configuration for the cloud data services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudConfig {
    /// API base URL.
    pub api_url: String,

    /// Upper bound on a single request.
    pub timeout: Duration,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CloudConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SYMMETRY_API_URL` - API base URL (default: https://api.symmetry.app)
    /// - `SYMMETRY_API_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("SYMMETRY_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout = match env::var("SYMMETRY_API_TIMEOUT_SECS") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self { api_url, timeout })
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name: "SYMMETRY_API_TIMEOUT_SECS",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CloudConfig::default();
        assert_eq!(config.api_url, "https://api.symmetry.app");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout(" 5 ").unwrap(), Duration::from_secs(5));
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("soon").is_err());
    }
}
