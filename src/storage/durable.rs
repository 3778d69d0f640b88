//! Durable key/value storage.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Key under which the last known transfer count is cached.
pub const TRANSACTION_COUNT_KEY: &str = "transactionCount";

/// Errors raised by the durable store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A thread-safe string map, optionally written through to a JSON file.
#[derive(Clone, Default)]
pub struct DurableStore {
    inner: Arc<DashMap<String, String>>,
    persistence_path: Option<String>,
}

impl DurableStore {
    /// Create a store that only lives in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store, loading the file if it exists.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let store = Self {
            inner: Arc::new(DashMap::new()),
            persistence_path: Some(path.to_string()),
        };
        if Path::new(path).exists() {
            let reader = BufReader::new(File::open(path)?);
            let map: HashMap<String, String> = serde_json::from_reader(reader)?;
            for (k, v) in map {
                store.inner.insert(k, v);
            }
            tracing::info!(path, entries = store.inner.len(), "Loaded durable store");
        }
        Ok(store)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).map(|r| r.value().clone())
    }

    /// Set a value, overwriting any previous one, and persist.
    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        self.inner.insert(key.to_string(), value.into());
        self.flush()
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(path) = &self.persistence_path {
            let map: HashMap<_, _> = self
                .inner
                .iter()
                .map(|r| (r.key().clone(), r.value().clone()))
                .collect();
            // Readers only ever see the old file or the complete new one.
            let staging = format!("{}.tmp", path);
            let mut writer = BufWriter::new(File::create(&staging)?);
            serde_json::to_writer(&mut writer, &map)?;
            writer.flush()?;
            std::fs::rename(&staging, path)?;
        }
        Ok(())
    }

    /// Cached transfer count, if one was stored and parses.
    pub fn transaction_count(&self) -> Option<u64> {
        self.get(TRANSACTION_COUNT_KEY)?.parse().ok()
    }

    pub fn set_transaction_count(&self, count: u64) -> Result<(), StorageError> {
        self.set(TRANSACTION_COUNT_KEY, count.to_string())
    }
}

impl std::fmt::Debug for DurableStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DurableStore")
            .field("entries", &self.inner.len())
            .field("persistence_path", &self.persistence_path)
            .finish()
    }
}
