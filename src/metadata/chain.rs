use crate::metadata::MetadataDriver;
use std::sync::Arc;

/// Ordered composite of per-namespace metadata drivers.
///
/// Dispatch walks the drivers in insertion order and picks the first whose
/// namespace is a prefix of the entity name.
#[derive(Debug, Clone, Default)]
pub struct DriverChain {
    drivers: Vec<(String, Arc<dyn MetadataDriver>)>,
}

impl DriverChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a driver under a namespace
    pub fn add_driver(&mut self, driver: Arc<dyn MetadataDriver>, namespace: impl Into<String>) {
        self.drivers.push((namespace.into(), driver));
    }

    /// Resolve the driver responsible for an entity name
    pub fn driver_for(&self, entity: &str) -> Option<&Arc<dyn MetadataDriver>> {
        self.drivers
            .iter()
            .find(|(namespace, _)| entity.starts_with(namespace.as_str()))
            .map(|(_, driver)| driver)
    }

    /// Iterate the attached namespaces in insertion order
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.drivers.iter().map(|(namespace, _)| namespace.as_str())
    }

    /// Get the number of attached drivers
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Check if the chain has no drivers
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AnnotationDriver, SourceKind, YamlDriver};
    use std::path::PathBuf;

    fn chain_with(namespaces: &[(&str, SourceKind)]) -> DriverChain {
        let mut chain = DriverChain::new();
        for (namespace, kind) in namespaces {
            let driver: Arc<dyn MetadataDriver> = match kind {
                SourceKind::Annotation => {
                    Arc::new(AnnotationDriver::new(vec![PathBuf::from("a")]))
                }
                _ => Arc::new(YamlDriver::new(vec![PathBuf::from("b")])),
            };
            chain.add_driver(driver, *namespace);
        }
        chain
    }

    #[test]
    fn dispatches_by_namespace_prefix() {
        let chain = chain_with(&[
            ("app::entities", SourceKind::Annotation),
            ("billing", SourceKind::Yml),
        ]);

        let driver = chain.driver_for("app::entities::User").unwrap();
        assert_eq!(driver.source_kind(), SourceKind::Annotation);

        let driver = chain.driver_for("billing::Invoice").unwrap();
        assert_eq!(driver.source_kind(), SourceKind::Yml);

        assert!(chain.driver_for("reports::Summary").is_none());
    }

    #[test]
    fn first_matching_namespace_wins() {
        let chain = chain_with(&[
            ("app", SourceKind::Annotation),
            ("app::billing", SourceKind::Yml),
        ]);

        let driver = chain.driver_for("app::billing::Invoice").unwrap();
        assert_eq!(driver.source_kind(), SourceKind::Annotation);
    }
}
