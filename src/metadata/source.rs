use crate::errors::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Recognized encodings for entity-mapping metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Mapping information lives on the entity sources themselves.
    Annotation,
    /// Mapping files with a fixed `.yml` suffix.
    Yml,
    /// Mapping files with a fixed `.xml` suffix.
    Xml,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Annotation => "annotation",
            SourceKind::Yml => "yml",
            SourceKind::Xml => "xml",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = CoreError;

    /// An empty or `default` kind means annotation. Anything outside the
    /// recognized set is a terminal configuration error naming the kind.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "default" | "annotation" => Ok(SourceKind::Annotation),
            "yml" => Ok(SourceKind::Yml),
            "xml" => Ok(SourceKind::Xml),
            other => Err(CoreError::unrecognized_source_kind(other)),
        }
    }
}

/// Declarative record describing where entity-mapping metadata lives and how
/// it is encoded.
///
/// The `kind` stays a raw string because descriptors typically arrive from
/// configuration files; it is parsed into a [`SourceKind`] when the
/// configuration object is built, which is where an unrecognized kind
/// surfaces as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataSource {
    #[serde(default = "default_kind")]
    pub kind: String,
    pub paths: Vec<PathBuf>,
    pub namespace: String,
}

fn default_kind() -> String {
    "annotation".to_string()
}

impl MetadataSource {
    /// Create an annotation-based source rooted at a single path
    pub fn annotation(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self::with_kind(SourceKind::Annotation, path, namespace)
    }

    /// Create a `.yml` mapping-file source rooted at a single path
    pub fn yml(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self::with_kind(SourceKind::Yml, path, namespace)
    }

    /// Create an `.xml` mapping-file source rooted at a single path
    pub fn xml(path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self::with_kind(SourceKind::Xml, path, namespace)
    }

    fn with_kind(
        kind: SourceKind,
        path: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            paths: vec![path.into()],
            namespace: namespace.into(),
        }
    }

    /// Add another lookup root to this source
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Parse the raw `kind` field into a recognized [`SourceKind`]
    pub fn source_kind(&self) -> Result<SourceKind, CoreError> {
        self.kind.parse()
    }
}
