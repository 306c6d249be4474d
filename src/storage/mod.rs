//! Durable key-value storage behind the session and screen-draft flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app persists small string values (most importantly the session
//! token) across restarts. Platform hosts back this with whatever local
//! storage they have; the flows in this crate only see the
//! [`KeyValueStore`] trait, so tests swap in [`MemoryStore`] and never
//! touch a real disk or device.

pub mod file;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Failure classes for a storage operation.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying file or device operation failed.
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    /// Stored data could not be encoded or decoded.
    #[error("storage encoding failure: {0}")]
    Serde(#[from] serde_json::Error),
    /// The backend rejected the operation.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Minimal async key-value interface over durable local storage.
///
/// Writes are last-write-wins; there is no transaction or watch surface
/// because no flow in this crate needs one.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`; deleting an absent key is not
    /// an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
