//! Store configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::crypto::{CryptoError, PlainCodec, SecretBoxCodec, ValueCodec};

/// Default database file.
pub const DEFAULT_STORE_PATH: &str = "symmetry.db";

/// Default store name.
pub const DEFAULT_STORE_ID: &str = "symmetry-app-storage";

const IN_MEMORY: &str = ":memory:";

/// Where and how the on-device store lives.
#[derive(Clone)]
pub struct StoreConfig {
    /// SQLite file, or `:memory:`.
    pub path: PathBuf,
    /// Name of the store inside the file.
    pub store_id: String,
    /// 32-byte key (`hex:`, hex or base64). `None` stores plaintext.
    pub encryption_key: Option<String>,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("path", &self.path)
            .field("store_id", &self.store_id)
            .field("encrypted", &self.encryption_key.is_some())
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
            store_id: DEFAULT_STORE_ID.to_string(),
            encryption_key: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SYMMETRY_STORE_PATH` | SQLite file or `:memory:` | `symmetry.db` |
    /// | `SYMMETRY_STORE_ID` | Store name inside the file | `symmetry-app-storage` |
    /// | `SYMMETRY_ENCRYPTION_KEY` | At-rest encryption key | (unset, plaintext) |
    pub fn from_env() -> Self {
        let path = env::var("SYMMETRY_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH));

        let store_id =
            env::var("SYMMETRY_STORE_ID").unwrap_or_else(|_| DEFAULT_STORE_ID.to_string());

        let encryption_key = env::var("SYMMETRY_ENCRYPTION_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Self {
            path,
            store_id,
            encryption_key,
        }
    }

    /// An in-memory store with the given name.
    pub fn in_memory(store_id: impl Into<String>) -> Self {
        Self {
            path: PathBuf::from(IN_MEMORY),
            store_id: store_id.into(),
            encryption_key: None,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str() == IN_MEMORY
    }

    /// The value codec implied by `encryption_key`.
    pub fn codec(&self) -> Result<Arc<dyn ValueCodec>, CryptoError> {
        match &self.encryption_key {
            Some(key) => Ok(Arc::new(SecretBoxCodec::parse(key)?)),
            None => Ok(Arc::new(PlainCodec)),
        }
    }
}
