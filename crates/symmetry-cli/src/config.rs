//! Runtime configuration for the CLI.

use std::env;
use std::fmt;
use std::str::FromStr;

use cloud_service::CloudConfig;
use kv_store::StoreConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid SYMMETRY_BACKEND: {0} (expected local or cloud)")]
    InvalidBackend(String),

    #[error(transparent)]
    Cloud(#[from] cloud_service::ConfigError),
}

/// Which implementation sits behind the data service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    Local,
    Cloud,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Backend::Local),
            "cloud" => Ok(Backend::Cloud),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Local => f.write_str("local"),
            Backend::Cloud => f.write_str("cloud"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub store: StoreConfig,
    pub cloud: CloudConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// - `SYMMETRY_BACKEND` - `local` or `cloud` (default: local)
    /// - store variables, see [`StoreConfig::from_env`]
    /// - API variables, see [`CloudConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match env::var("SYMMETRY_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => Backend::default(),
        };

        Ok(Self {
            backend,
            store: StoreConfig::from_env(),
            cloud: CloudConfig::from_env()?,
        })
    }
}
