//! File-backed [`KeyValueStore`] for native hosts.
//!
//! DESIGN
//! ======
//! All keys live in one JSON object file, load-modify-write on every
//! mutation. The values here are tiny (a session token, a few UI drafts),
//! so rewriting the whole file is cheaper than carrying a database
//! dependency. A missing file reads as an empty store.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{KeyValueStore, StorageError};

/// Key-value store persisted as a JSON object at a fixed path.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`. The file is created on
    /// first write, including any missing parent directories.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_map(&self) -> Result<HashMap<String, String>, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn persist_map(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string(map)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.load_map().await?;
        map.insert(key.to_owned(), value.to_owned());
        self.persist_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.load_map().await?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.persist_map(&map).await
    }
}
