use crate::container::Container;
use crate::errors::CoreError;

/// Service provider trait for wiring services into a container.
pub trait ServiceProvider: Send + Sync {
    /// Provider name for identification
    fn name(&self) -> &'static str;

    /// Register services in the container.
    /// Called once during the registration phase; all side effects are
    /// container mutations.
    fn register(&self, container: &mut Container) -> Result<(), CoreError>;

    /// Boot the provider after all providers are registered.
    /// Default implementation does nothing.
    fn boot(&self, container: &Container) -> Result<(), CoreError> {
        let _ = container;
        Ok(())
    }

    /// Provider description
    fn description(&self) -> Option<&'static str> {
        None
    }
}
