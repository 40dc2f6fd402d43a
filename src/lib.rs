pub mod cache;
pub mod config;
pub mod connection;
pub mod container;
pub mod errors;
pub mod loader;
pub mod manager;
pub mod metadata;
pub mod providers;
pub mod settings;

// Re-export key types for convenience
pub use cache::{CacheBackend, MemoryBackend};
pub use config::OrmConfiguration;
pub use connection::{Connection, ConnectionHandle};
pub use container::Container;
pub use errors::CoreError;
pub use loader::{NamespaceIndex, SymbolRegistry};
pub use manager::EntityManager;
pub use metadata::{
    AnnotationDriver, DriverChain, MetadataDriver, MetadataSource, SourceKind, XmlDriver,
    YamlDriver,
};
pub use providers::{OrmServiceProvider, ServiceProvider};
pub use settings::OrmSettings;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get crate version
pub fn version() -> &'static str {
    VERSION
}
