//! ORM bootstrap provider.
//!
//! Validates the caller-installed connection, applies option defaults,
//! and publishes the lazy configuration and entity-manager factories.

use crate::cache::{CacheBackend, MemoryBackend};
use crate::config::OrmConfiguration;
use crate::connection::ConnectionHandle;
use crate::container::Container;
use crate::errors::CoreError;
use crate::loader::{NamespaceIndex, SymbolRegistry};
use crate::manager::EntityManager;
use crate::metadata::{driver_for_source, DriverChain, MetadataSource};
use crate::providers::ServiceProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Container keys owned by the ORM provider.
pub mod keys {
    /// Caller-installed [`crate::connection::ConnectionHandle`]. Precondition.
    pub const DB: &str = "db";
    /// `Vec<MetadataSource>` declaring where mapping metadata lives
    pub const ENTITIES: &str = "db.orm.entities";
    /// `PathBuf` where generated proxy code is written
    pub const PROXIES_DIR: &str = "db.orm.proxies_dir";
    /// `String` logical namespace for generated proxies
    pub const PROXIES_NAMESPACE: &str = "db.orm.proxies_namespace";
    /// `bool` regenerate proxies automatically vs. pre-built
    pub const AUTO_GENERATE_PROXIES: &str = "db.orm.auto_generate_proxies";
    /// `Arc<dyn CacheBackend>` backing the metadata and query caches
    pub const CACHE: &str = "db.orm.cache";
    /// Lazy shared `OrmConfiguration`
    pub const CONFIG: &str = "db.orm.config";
    /// Lazy shared `EntityManager`
    pub const ENTITY_MANAGER: &str = "db.orm.em";
}

/// Conventional default lookup root for entity sources.
pub const DEFAULT_ENTITY_PATH: &str = "entities";

/// Conventional default namespace for entity sources.
pub const DEFAULT_ENTITY_NAMESPACE: &str = "entities";

/// Conventional directory generated proxies are written to.
pub const DEFAULT_PROXY_DIR: &str = "cache/orm/proxies";

/// Conventional namespace for generated proxies.
pub const DEFAULT_PROXY_NAMESPACE: &str = "OrmProxy";

/// Bootstrap registrar for the ORM layer.
///
/// `register` checks the connection precondition, fills unset options with
/// their defaults, and installs two lazy shared values: the configuration
/// object under [`keys::CONFIG`] and the entity manager under
/// [`keys::ENTITY_MANAGER`]. Both are built on first access and memoized;
/// a failed build is surfaced to the caller and retried on the next access.
pub struct OrmServiceProvider {
    symbols: Arc<dyn SymbolRegistry>,
}

impl OrmServiceProvider {
    /// Create a provider with its own in-process namespace index
    pub fn new() -> Self {
        Self::with_symbol_registry(Arc::new(NamespaceIndex::new()))
    }

    /// Create a provider publishing namespace locations into an external
    /// registry
    pub fn with_symbol_registry(registry: Arc<dyn SymbolRegistry>) -> Self {
        Self { symbols: registry }
    }

    /// The side table namespace/path pairs are recorded into
    pub fn symbol_registry(&self) -> &Arc<dyn SymbolRegistry> {
        &self.symbols
    }

    /// Set each recognized option to its default unless the caller already
    /// set it. A caller may override any subset without restating the rest.
    fn apply_defaults(&self, container: &mut Container) {
        if !container.contains(keys::ENTITIES) {
            debug!(
                path = DEFAULT_ENTITY_PATH,
                namespace = DEFAULT_ENTITY_NAMESPACE,
                "defaulting entity sources to a single annotation source"
            );
            container.insert(
                keys::ENTITIES,
                vec![MetadataSource::annotation(
                    DEFAULT_ENTITY_PATH,
                    DEFAULT_ENTITY_NAMESPACE,
                )],
            );
        }
        if !container.contains(keys::PROXIES_DIR) {
            container.insert(keys::PROXIES_DIR, PathBuf::from(DEFAULT_PROXY_DIR));
        }
        if !container.contains(keys::PROXIES_NAMESPACE) {
            container.insert(keys::PROXIES_NAMESPACE, DEFAULT_PROXY_NAMESPACE.to_string());
        }
        if !container.contains(keys::AUTO_GENERATE_PROXIES) {
            container.insert(keys::AUTO_GENERATE_PROXIES, true);
        }
        if !container.contains(keys::CACHE) {
            let cache: Arc<dyn CacheBackend> = Arc::new(MemoryBackend::new());
            container.insert(keys::CACHE, cache);
        }
    }

    /// Install the lazy configuration factory.
    ///
    /// Deferred so options overridden after `register` but before first use
    /// still take effect.
    fn register_configuration(&self, container: &mut Container) {
        let symbols = Arc::clone(&self.symbols);
        container.share(keys::CONFIG, move |c: &Container| {
            debug!("building ORM configuration");

            let cache = c.get::<Arc<dyn CacheBackend>>(keys::CACHE)?;
            let mut config = OrmConfiguration::new();
            config.set_metadata_cache(Arc::clone(&*cache));
            config.set_query_cache(Arc::clone(&*cache));

            let sources = c.get::<Vec<MetadataSource>>(keys::ENTITIES)?;
            let mut chain = DriverChain::new();
            for source in sources.iter() {
                let driver = driver_for_source(source)?;
                debug!(
                    namespace = %source.namespace,
                    kind = %source.kind,
                    "attaching metadata driver"
                );
                chain.add_driver(driver, source.namespace.clone());
                symbols.register_namespace(&source.namespace, &source.paths);
            }
            config.set_metadata_driver(chain);

            config.set_proxy_dir((*c.get::<PathBuf>(keys::PROXIES_DIR)?).clone());
            config.set_proxy_namespace((*c.get::<String>(keys::PROXIES_NAMESPACE)?).clone());
            config.set_auto_generate_proxies(*c.get::<bool>(keys::AUTO_GENERATE_PROXIES)?);

            Ok(config)
        });
    }

    /// Install the lazy entity-manager factory.
    fn register_entity_manager(&self, container: &mut Container) {
        container.share(keys::ENTITY_MANAGER, |c: &Container| {
            let connection = c.get::<ConnectionHandle>(keys::DB)?;
            let configuration = c.get::<OrmConfiguration>(keys::CONFIG)?;
            debug!(driver = connection.driver_name(), "constructing entity manager");
            Ok(EntityManager::create((*connection).clone(), configuration))
        });
    }
}

impl Default for OrmServiceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceProvider for OrmServiceProvider {
    fn name(&self) -> &'static str {
        "orm"
    }

    fn register(&self, container: &mut Container) -> Result<(), CoreError> {
        // Precondition first: nothing is installed when it fails.
        container.get::<ConnectionHandle>(keys::DB).map_err(|_| {
            CoreError::invalid_connection(format!(
                "'{}' must hold a ConnectionHandle before the ORM provider registers",
                keys::DB
            ))
        })?;

        self.apply_defaults(container);
        self.register_configuration(container);
        self.register_entity_manager(container);
        Ok(())
    }

    fn description(&self) -> Option<&'static str> {
        Some("Wires a lazily-built ORM configuration and entity manager into the container")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;

    #[derive(Debug)]
    struct StubConnection;

    impl Connection for StubConnection {
        fn driver_name(&self) -> &str {
            "stub"
        }

        fn is_open(&self) -> bool {
            true
        }
    }

    fn container_with_connection() -> Container {
        let mut container = Container::new();
        container.insert(keys::DB, ConnectionHandle::new(StubConnection));
        container
    }

    #[test]
    fn register_fails_without_a_connection() {
        let mut container = Container::new();
        let err = OrmServiceProvider::new()
            .register(&mut container)
            .unwrap_err();

        assert!(err.is_invalid_connection());
        assert!(container.is_empty());
    }

    #[test]
    fn register_fails_when_db_holds_the_wrong_type() {
        let mut container = Container::new();
        container.insert(keys::DB, "not a connection".to_string());

        let err = OrmServiceProvider::new()
            .register(&mut container)
            .unwrap_err();

        assert!(err.is_invalid_connection());
        assert!(!container.contains(keys::CONFIG));
        assert!(!container.contains(keys::ENTITY_MANAGER));
    }

    #[test]
    fn register_applies_defaults_for_unset_options() {
        let mut container = container_with_connection();
        OrmServiceProvider::new().register(&mut container).unwrap();

        let sources = container.get::<Vec<MetadataSource>>(keys::ENTITIES).unwrap();
        assert_eq!(
            *sources,
            vec![MetadataSource::annotation(
                DEFAULT_ENTITY_PATH,
                DEFAULT_ENTITY_NAMESPACE
            )]
        );
        assert_eq!(
            *container.get::<PathBuf>(keys::PROXIES_DIR).unwrap(),
            PathBuf::from(DEFAULT_PROXY_DIR)
        );
        assert_eq!(
            *container.get::<String>(keys::PROXIES_NAMESPACE).unwrap(),
            DEFAULT_PROXY_NAMESPACE
        );
        assert!(*container.get::<bool>(keys::AUTO_GENERATE_PROXIES).unwrap());
        assert!(container.contains(keys::CACHE));
        assert!(container.contains(keys::CONFIG));
        assert!(container.contains(keys::ENTITY_MANAGER));
    }

    #[test]
    fn register_preserves_caller_overrides() {
        let mut container = container_with_connection();
        container.insert(keys::PROXIES_DIR, PathBuf::from("target/proxies"));
        container.insert(keys::AUTO_GENERATE_PROXIES, false);

        OrmServiceProvider::new().register(&mut container).unwrap();

        assert_eq!(
            *container.get::<PathBuf>(keys::PROXIES_DIR).unwrap(),
            PathBuf::from("target/proxies")
        );
        assert!(!*container.get::<bool>(keys::AUTO_GENERATE_PROXIES).unwrap());
        // untouched options still got their defaults
        assert_eq!(
            *container.get::<String>(keys::PROXIES_NAMESPACE).unwrap(),
            DEFAULT_PROXY_NAMESPACE
        );
    }
}
