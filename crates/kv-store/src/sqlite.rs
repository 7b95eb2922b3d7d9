//! SQLite-backed store.
//!
//! Several named stores can share one database file; each owns the rows
//! tagged with its `store_id`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use crate::config::StoreConfig;
use crate::crypto::{PlainCodec, ValueCodec};
use crate::error::{Result, StoreError};
use crate::store::KeyValueStore;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv_entries (
    store_id TEXT NOT NULL,
    key TEXT NOT NULL,
    value BLOB NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now')),
    PRIMARY KEY (store_id, key)
);
"#;

/// A named store persisted in SQLite.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    store_id: String,
    codec: Arc<dyn ValueCodec>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("store_id", &self.store_id)
            .field("codec", &self.codec.label())
            .finish()
    }
}

impl SqliteStore {
    /// Open (creating if needed) the store `store_id` in the file at `path`.
    pub fn open(
        path: impl AsRef<Path>,
        store_id: impl Into<String>,
        codec: Arc<dyn ValueCodec>,
    ) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self::with_connection(conn, store_id.into(), codec)?;

        tracing::info!(
            "Opened store {} at {} (codec: {})",
            store.store_id,
            path.display(),
            store.codec.label()
        );

        Ok(store)
    }

    /// Open a store that disappears when dropped.
    pub fn open_in_memory(store_id: impl Into<String>, codec: Arc<dyn ValueCodec>) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, store_id.into(), codec)
    }

    /// Open the store described by `config`.
    ///
    /// A path of `:memory:` gives an in-memory database.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let codec = config.codec()?;
        if config.is_in_memory() {
            Self::open_in_memory(config.store_id.clone(), codec)
        } else {
            Self::open(&config.path, config.store_id.clone(), codec)
        }
    }

    /// A plaintext store, mostly useful in tests.
    pub fn plain(path: impl AsRef<Path>, store_id: impl Into<String>) -> Result<Self> {
        Self::open(path, store_id, Arc::new(PlainCodec))
    }

    fn with_connection(
        conn: Connection,
        store_id: String,
        codec: Arc<dyn ValueCodec>,
    ) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
            store_id,
            codec,
        })
    }

    fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let conn = self.conn.lock().map_err(|_| StoreError::MutexPoisoned)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_entries WHERE store_id = ?1 AND key = ?2",
                params![self.store_id, key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Keys currently held by this store, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        let conn = self.conn.lock().map_err(|_| StoreError::MutexPoisoned)?;
        let mut stmt =
            conn.prepare("SELECT key FROM kv_entries WHERE store_id = ?1 ORDER BY key")?;
        let rows = stmt.query_map(params![self.store_id], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = match self.fetch(key) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!(store = %self.store_id, key, error = %err, "Read failed, treating as absent");
                return None;
            }
        };

        let plaintext = match self.codec.open(&raw) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(store = %self.store_id, key, error = %err, "Could not decrypt value, treating as absent");
                return None;
            }
        };

        match String::from_utf8(plaintext) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(store = %self.store_id, key, error = %err, "Stored value is not UTF-8, treating as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let encoded = self.codec.seal(value.as_bytes())?;
        let conn = self.conn.lock().map_err(|_| StoreError::MutexPoisoned)?;
        conn.execute(
            r#"
            INSERT INTO kv_entries (store_id, key, value)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(store_id, key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![self.store_id, key, encoded],
        )?;
        tracing::debug!(store = %self.store_id, key, bytes = value.len(), "Wrote value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::MutexPoisoned)?;
        conn.execute(
            "DELETE FROM kv_entries WHERE store_id = ?1 AND key = ?2",
            params![self.store_id, key],
        )?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| StoreError::MutexPoisoned)?;
        let removed = conn.execute(
            "DELETE FROM kv_entries WHERE store_id = ?1",
            params![self.store_id],
        )?;
        tracing::info!("Cleared store {} ({} keys)", self.store_id, removed);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.store_id
    }
}
