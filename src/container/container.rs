use crate::errors::CoreError;
use once_cell::sync::OnceCell;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

type AnyService = Arc<dyn Any + Send + Sync>;
type SharedFactory = Box<dyn Fn(&Container) -> Result<AnyService, CoreError> + Send + Sync>;

enum Entry {
    /// Eagerly stored value.
    Value(AnyService),
    /// Deferred value: the factory runs on first access, the result is
    /// memoized in the cell. Failed builds are not memoized, so a later
    /// access retries the factory.
    Shared {
        factory: SharedFactory,
        cell: OnceCell<AnyService>,
    },
}

/// String-keyed dependency container with lazy shared registration.
///
/// All mutation happens through `&mut self` during the registration phase;
/// lookups (including first-access evaluation of shared factories) only need
/// `&self`. Concurrent first-access races on a shared entry are resolved by
/// the cell: the factory succeeds at most once per registration.
pub struct Container {
    entries: HashMap<String, Entry>,
}

impl Container {
    /// Create a new empty container
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store an eager value under a key, replacing any previous entry
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.entries
            .insert(key.into(), Entry::Value(Arc::new(value)));
    }

    /// Register a shared (lazy, memoized) value under a key.
    ///
    /// The factory is invoked on first `get` for the key and may read other
    /// container entries. The built value is cached for the container's
    /// lifetime; re-registering the key discards the cached value.
    pub fn share<T, F>(&mut self, key: impl Into<String>, factory: F)
    where
        T: Any + Send + Sync,
        F: Fn(&Container) -> Result<T, CoreError> + Send + Sync + 'static,
    {
        let factory: SharedFactory =
            Box::new(move |container| factory(container).map(|value| Arc::new(value) as AnyService));
        self.entries.insert(
            key.into(),
            Entry::Shared {
                factory,
                cell: OnceCell::new(),
            },
        );
    }

    /// Check if a key is present (eager or shared, built or not)
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Resolve a value, forcing a shared entry's factory on first access.
    ///
    /// Fails with `ServiceNotFound` for a missing key, `TypeMismatch` when
    /// the stored value is not a `T`, or the factory's own error for a
    /// shared entry whose build fails.
    pub fn get<T>(&self, key: &str) -> Result<Arc<T>, CoreError>
    where
        T: Any + Send + Sync,
    {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| CoreError::service_not_found(key))?;

        let value = match entry {
            Entry::Value(value) => Arc::clone(value),
            Entry::Shared { factory, cell } => {
                Arc::clone(cell.get_or_try_init(|| factory(self))?)
            }
        };

        value.downcast::<T>().map_err(|_| CoreError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// Try to resolve a value, returning None on any failure
    pub fn try_get<T>(&self, key: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.get(key).ok()
    }

    /// Get the number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("entries", &self.entries.len())
            .finish()
    }
}
