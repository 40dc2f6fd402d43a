//! ORM configuration object assembled by the bootstrap registrar.

use crate::cache::CacheBackend;
use crate::metadata::DriverChain;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable-after-build configuration handed to the entity manager.
///
/// Built once by the registrar's lazy factory; the setters exist for the
/// build phase and for callers assembling a configuration by hand.
#[derive(Debug, Default)]
pub struct OrmConfiguration {
    metadata_cache: Option<Arc<dyn CacheBackend>>,
    query_cache: Option<Arc<dyn CacheBackend>>,
    metadata_driver: Option<DriverChain>,
    proxy_dir: PathBuf,
    proxy_namespace: String,
    auto_generate_proxies: bool,
}

impl OrmConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_metadata_cache(&mut self, cache: Arc<dyn CacheBackend>) {
        self.metadata_cache = Some(cache);
    }

    pub fn metadata_cache(&self) -> Option<&Arc<dyn CacheBackend>> {
        self.metadata_cache.as_ref()
    }

    pub fn set_query_cache(&mut self, cache: Arc<dyn CacheBackend>) {
        self.query_cache = Some(cache);
    }

    pub fn query_cache(&self) -> Option<&Arc<dyn CacheBackend>> {
        self.query_cache.as_ref()
    }

    pub fn set_metadata_driver(&mut self, chain: DriverChain) {
        self.metadata_driver = Some(chain);
    }

    pub fn metadata_driver(&self) -> Option<&DriverChain> {
        self.metadata_driver.as_ref()
    }

    /// Set where generated proxy code is written
    pub fn set_proxy_dir(&mut self, dir: impl Into<PathBuf>) {
        self.proxy_dir = dir.into();
    }

    pub fn proxy_dir(&self) -> &Path {
        &self.proxy_dir
    }

    /// Set the logical namespace for generated proxies
    pub fn set_proxy_namespace(&mut self, namespace: impl Into<String>) {
        self.proxy_namespace = namespace.into();
    }

    pub fn proxy_namespace(&self) -> &str {
        &self.proxy_namespace
    }

    /// Set whether proxies regenerate automatically instead of being pre-built
    pub fn set_auto_generate_proxies(&mut self, auto_generate: bool) {
        self.auto_generate_proxies = auto_generate;
    }

    pub fn auto_generate_proxies(&self) -> bool {
        self.auto_generate_proxies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryBackend;
    use crate::metadata::{AnnotationDriver, MetadataDriver};

    #[test]
    fn setters_populate_every_slot() {
        let cache: Arc<dyn CacheBackend> = Arc::new(MemoryBackend::new());
        let mut chain = DriverChain::new();
        let driver: Arc<dyn MetadataDriver> =
            Arc::new(AnnotationDriver::new(vec![PathBuf::from("entities")]));
        chain.add_driver(driver, "entities");

        let mut config = OrmConfiguration::new();
        config.set_metadata_cache(Arc::clone(&cache));
        config.set_query_cache(cache);
        config.set_metadata_driver(chain);
        config.set_proxy_dir("cache/orm/proxies");
        config.set_proxy_namespace("OrmProxy");
        config.set_auto_generate_proxies(true);

        assert!(config.metadata_cache().is_some());
        assert!(config.query_cache().is_some());
        assert_eq!(config.metadata_driver().unwrap().len(), 1);
        assert_eq!(config.proxy_dir(), Path::new("cache/orm/proxies"));
        assert_eq!(config.proxy_namespace(), "OrmProxy");
        assert!(config.auto_generate_proxies());
    }
}
