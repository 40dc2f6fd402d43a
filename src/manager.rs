//! The client-facing persistence handle produced lazily by the registrar.

use crate::config::OrmConfiguration;
use crate::connection::ConnectionHandle;
use crate::metadata::MetadataDriver;
use std::sync::Arc;

/// Shared entity manager built from a connection and a finished
/// configuration.
///
/// Constructed at most once per container; everything beyond holding the two
/// collaborators together belongs to the ORM engine itself.
#[derive(Debug)]
pub struct EntityManager {
    connection: ConnectionHandle,
    configuration: Arc<OrmConfiguration>,
}

impl EntityManager {
    /// Create a manager from a connection and configuration
    pub fn create(connection: ConnectionHandle, configuration: Arc<OrmConfiguration>) -> Self {
        Self {
            connection,
            configuration,
        }
    }

    pub fn connection(&self) -> &ConnectionHandle {
        &self.connection
    }

    pub fn configuration(&self) -> &OrmConfiguration {
        &self.configuration
    }

    /// Resolve the metadata driver responsible for an entity name
    pub fn metadata_driver_for(&self, entity: &str) -> Option<Arc<dyn MetadataDriver>> {
        self.configuration
            .metadata_driver()
            .and_then(|chain| chain.driver_for(entity))
            .map(Arc::clone)
    }

    /// Whether the underlying connection is open
    pub fn is_open(&self) -> bool {
        self.connection.is_open()
    }
}
