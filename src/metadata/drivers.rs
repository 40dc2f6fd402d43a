use crate::errors::CoreError;
use crate::metadata::{MetadataSource, SourceKind};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Fixed suffix for `.yml` mapping files. Not configurable.
pub const YML_EXTENSION: &str = ".yml";

/// Fixed suffix for `.xml` mapping files. Not configurable.
pub const XML_EXTENSION: &str = ".xml";

/// A per-kind resolver for entity-mapping metadata.
///
/// Drivers here only describe where and how metadata is found; actually
/// parsing mapping information belongs to the ORM engine consuming the
/// configuration.
pub trait MetadataDriver: Send + Sync + fmt::Debug {
    /// The encoding this driver understands
    fn source_kind(&self) -> SourceKind;

    /// Lookup roots for mapping information
    fn paths(&self) -> &[PathBuf];

    /// Fixed file suffix, for file-based drivers
    fn file_extension(&self) -> Option<&str> {
        None
    }
}

/// Driver for mapping metadata declared on the entity sources themselves.
#[derive(Debug, Clone)]
pub struct AnnotationDriver {
    paths: Vec<PathBuf>,
}

impl AnnotationDriver {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl MetadataDriver for AnnotationDriver {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Annotation
    }

    fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Driver for `.yml` mapping files.
#[derive(Debug, Clone)]
pub struct YamlDriver {
    paths: Vec<PathBuf>,
}

impl YamlDriver {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl MetadataDriver for YamlDriver {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Yml
    }

    fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn file_extension(&self) -> Option<&str> {
        Some(YML_EXTENSION)
    }
}

/// Driver for `.xml` mapping files.
#[derive(Debug, Clone)]
pub struct XmlDriver {
    paths: Vec<PathBuf>,
}

impl XmlDriver {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl MetadataDriver for XmlDriver {
    fn source_kind(&self) -> SourceKind {
        SourceKind::Xml
    }

    fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn file_extension(&self) -> Option<&str> {
        Some(XML_EXTENSION)
    }
}

/// Build the driver matching a source descriptor's kind.
///
/// Fails with the unrecognized-kind error when the descriptor's raw kind is
/// outside the recognized set; the caller must treat that as terminal rather
/// than skip the descriptor.
pub fn driver_for_source(source: &MetadataSource) -> Result<Arc<dyn MetadataDriver>, CoreError> {
    let driver: Arc<dyn MetadataDriver> = match source.source_kind()? {
        SourceKind::Annotation => Arc::new(AnnotationDriver::new(source.paths.clone())),
        SourceKind::Yml => Arc::new(YamlDriver::new(source.paths.clone())),
        SourceKind::Xml => Arc::new(XmlDriver::new(source.paths.clone())),
    };
    Ok(driver)
}
