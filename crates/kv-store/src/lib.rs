//! Key-value persistence for the Symmetry data layer.
//!
//! This crate provides:
//!
//! - [`KeyValueStore`] - a synchronous get/set/delete/clear primitive over a
//!   named store
//! - [`SqliteStore`] - the on-device implementation, optionally encrypted at
//!   rest with [`SecretBoxCodec`]
//! - [`MemoryStore`] - an in-process implementation for tests
//! - [`collection`] - typed JSON collections on top of any store
//!
//! Reads never fail: a missing, unreadable or undecryptable slot is reported
//! as absent.
//!
//! # Example
//!
//! ```rust
//! use kv_store::{collection, keys, KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new("example");
//! collection::write_all(&store, keys::CARDIO_LOGS, &["a", "b"]).unwrap();
//!
//! let logs: Vec<String> = collection::read_all(&store, keys::CARDIO_LOGS);
//! assert_eq!(logs, vec!["a", "b"]);
//!
//! let nothing: Vec<String> = collection::read_all(&store, keys::WORKOUT_PLANS);
//! assert!(nothing.is_empty());
//! ```

pub mod collection;
mod config;
mod crypto;
mod error;
pub mod keys;
mod memory;
mod sqlite;
mod store;

pub use config::StoreConfig;
pub use crypto::{CryptoError, PlainCodec, SecretBoxCodec, ValueCodec};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::KeyValueStore;
