//! Entity-mapping metadata: source descriptors, per-kind drivers, and the
//! composite chain that routes resolution by namespace.

pub mod chain;
pub mod drivers;
pub mod source;

pub use chain::DriverChain;
pub use drivers::{
    driver_for_source, AnnotationDriver, MetadataDriver, XmlDriver, YamlDriver, XML_EXTENSION,
    YML_EXTENSION,
};
pub use source::{MetadataSource, SourceKind};
