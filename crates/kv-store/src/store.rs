//! The KeyValueStore trait definition.

use crate::error::Result;

/// A named, synchronous string store.
///
/// There are no transactions or batches: every `set` replaces one value.
/// This trait is object-safe and can be used with `Arc<dyn KeyValueStore>`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`.
    ///
    /// Returns `None` when the key is absent and also when the stored value
    /// cannot be read back (corruption, wrong encryption key). Implementations
    /// log the latter instead of surfacing it.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn delete(&self, key: &str) -> Result<()>;

    /// Remove every key in this store.
    fn clear(&self) -> Result<()>;

    /// The store's name, for logs.
    fn name(&self) -> &str;
}
