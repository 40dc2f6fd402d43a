//! Symbol-location side table mapping namespaces to source paths.
//!
//! This is an external-collaborator seam: the registrar records each
//! metadata source's namespace/path pair here so whatever resolves entity
//! symbols at runtime can find them. Nothing in the bootstrap core reads it
//! back.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;

/// Registry capability the registrar publishes namespace locations into.
pub trait SymbolRegistry: Send + Sync {
    /// Record lookup roots for a namespace
    fn register_namespace(&self, namespace: &str, paths: &[PathBuf]);
}

/// Default in-process implementation of [`SymbolRegistry`].
#[derive(Debug, Default)]
pub struct NamespaceIndex {
    map: RwLock<HashMap<String, Vec<PathBuf>>>,
}

impl NamespaceIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded lookup roots for a namespace
    pub fn paths_for(&self, namespace: &str) -> Option<Vec<PathBuf>> {
        self.map.read().get(namespace).cloned()
    }

    /// Get the number of recorded namespaces
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

impl SymbolRegistry for NamespaceIndex {
    fn register_namespace(&self, namespace: &str, paths: &[PathBuf]) {
        self.map
            .write()
            .entry(namespace.to_string())
            .or_default()
            .extend_from_slice(paths);
    }
}
