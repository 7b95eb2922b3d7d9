//! Typed JSON collections over a [`KeyValueStore`].
//!
//! Collections are read and written whole: a write replaces the entire
//! array with a single `set`. Missing or malformed slots read as empty, so
//! callers can always render an "empty state".

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::store::KeyValueStore;

/// Read a single JSON value, or `None` if the slot is missing or undecodable.
pub fn read_one<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(
                store = store.name(),
                key,
                error = %err,
                "Discarding undecodable slot"
            );
            None
        }
    }
}

/// Read a JSON array. Missing or malformed slots yield an empty vector.
pub fn read_all<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    read_one(store, key).unwrap_or_default()
}

/// Replace the value under `key` with `value` encoded as JSON.
pub fn write_one<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Replace the whole collection under `key`.
pub fn write_all<T, S>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    write_one(store, key, items)
}
