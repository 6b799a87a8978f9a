//! Concurrent content store keyed by canonical resource path.

use std::sync::Arc;
use std::time::SystemTime;

use bytes::Bytes;
use dashmap::DashMap;

/// Memoized file content.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Full file content.
    pub content: Bytes,
    /// Modification time captured when the file was loaded.
    pub modified: SystemTime,
}

/// Path → entry map shared by every request handler.
///
/// Entries are replaced as whole `Arc`s, so concurrent writers for the same
/// key never produce a torn value; the last write wins.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: DashMap<String, Arc<CacheEntry>>,
}

impl ContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry cached under `path`.
    pub fn get(&self, path: &str) -> Option<Arc<CacheEntry>> {
        self.entries.get(path).map(|entry| Arc::clone(entry.value()))
    }

    /// Stores `entry` under `path`, replacing any previous value.
    pub fn insert(&self, path: impl Into<String>, entry: Arc<CacheEntry>) {
        self.entries.insert(path.into(), entry);
    }

    /// Number of cached resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
