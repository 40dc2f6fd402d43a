//! Connection capability the caller must install before registration.

use std::fmt;
use std::sync::Arc;

/// Capability expected of a caller-supplied database connection.
///
/// The bootstrap core never drives the connection; it only checks the
/// capability is present and hands a reference to the entity manager.
pub trait Connection: Send + Sync + fmt::Debug {
    /// Name of the database driver behind this connection
    fn driver_name(&self) -> &str;

    /// Whether the connection is currently open
    fn is_open(&self) -> bool;
}

/// Cloneable handle around a caller-owned connection.
///
/// This is the concrete type the registrar expects under the `db` container
/// key; anything else fails the precondition check.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    inner: Arc<dyn Connection>,
}

impl ConnectionHandle {
    /// Wrap a connection in a shareable handle
    pub fn new(connection: impl Connection + 'static) -> Self {
        Self {
            inner: Arc::new(connection),
        }
    }

    /// Wrap an already-shared connection
    pub fn from_arc(connection: Arc<dyn Connection>) -> Self {
        Self { inner: connection }
    }

    pub fn driver_name(&self) -> &str {
        self.inner.driver_name()
    }

    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }
}
