//! In-process, non-shared cache backend.

use crate::cache::CacheBackend;
use parking_lot::RwLock;
use std::collections::HashMap;

/// HashMap-backed cache local to the process.
///
/// This is the registrar's default cache implementation; it is never shared
/// across processes and carries no eviction or TTL policy.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create a new empty memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of cached entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl CacheBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: Vec<u8>) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    fn flush(&self) {
        self.entries.write().clear();
    }
}
