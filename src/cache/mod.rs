//! Cache abstraction backing the ORM's metadata and query caches.

pub mod memory;

pub use memory::MemoryBackend;

/// Minimal cache capability the ORM configuration consumes.
///
/// Values are opaque byte blobs; interpretation belongs to the caller.
pub trait CacheBackend: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Put a value in the cache
    fn put(&self, key: &str, value: Vec<u8>);

    /// Check if a key exists in the cache
    fn contains(&self, key: &str) -> bool;

    /// Clear all entries
    fn flush(&self);
}
