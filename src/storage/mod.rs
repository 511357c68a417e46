//! Key-value persistence for the gallery.
//!
//! The gallery document lives in a single string slot. Providers only move
//! strings in and out of named slots; encoding is the store's concern.

pub mod db;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use db::SqliteStorage;
pub use memory::MemoryStorage;
pub use models::*;

/// Errors raised by a persistence provider.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The slot could not be read.
    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// The slot could not be written or removed. The previous value is intact.
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    /// The backing medium is gone (closed connection, panicked worker).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string storage addressed by key.
///
/// `set` must be atomic per key: after a failed `set` a subsequent `get`
/// returns the last successfully written value.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Empties the slot. Removing an empty slot is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: Storage + ?Sized> Storage for std::sync::Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key).await
    }
}
