//! Declarative overrides for the registrar's container options.
//!
//! Loadable from YAML or JSON and applied to the container before
//! registration, so deployments can override any subset of options without
//! touching code.

use crate::container::Container;
use crate::errors::CoreError;
use crate::metadata::MetadataSource;
use crate::providers::orm::keys;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional overrides for the ORM provider's option keys.
///
/// Every field is optional; `apply` only touches keys for fields that are
/// present, so defaults still fill the rest during `register`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrmSettings {
    pub entities: Option<Vec<MetadataSource>>,
    pub proxies_dir: Option<PathBuf>,
    pub proxies_namespace: Option<String>,
    pub auto_generate_proxies: Option<bool>,
}

impl OrmSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(input: &str) -> Result<Self, CoreError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parse settings from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Seed the container with every present override
    pub fn apply(&self, container: &mut Container) {
        if let Some(entities) = &self.entities {
            container.insert(keys::ENTITIES, entities.clone());
        }
        if let Some(dir) = &self.proxies_dir {
            container.insert(keys::PROXIES_DIR, dir.clone());
        }
        if let Some(namespace) = &self.proxies_namespace {
            container.insert(keys::PROXIES_NAMESPACE, namespace.clone());
        }
        if let Some(auto_generate) = self.auto_generate_proxies {
            container.insert(keys::AUTO_GENERATE_PROXIES, auto_generate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::SourceKind;

    #[test]
    fn parses_yaml_overrides() {
        let yaml = r#"
entities:
  - kind: yml
    paths: ["config/mappings"]
    namespace: billing
proxies_dir: target/proxies
"#;
        let settings = OrmSettings::from_yaml_str(yaml).unwrap();

        let entities = settings.entities.as_ref().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].source_kind().unwrap(), SourceKind::Yml);
        assert_eq!(settings.proxies_dir, Some(PathBuf::from("target/proxies")));
        assert_eq!(settings.proxies_namespace, None);
        assert_eq!(settings.auto_generate_proxies, None);
    }

    #[test]
    fn parses_json_overrides() {
        let json = r#"{"auto_generate_proxies": false, "proxies_namespace": "AppProxy"}"#;
        let settings = OrmSettings::from_json_str(json).unwrap();

        assert_eq!(settings.auto_generate_proxies, Some(false));
        assert_eq!(settings.proxies_namespace, Some("AppProxy".to_string()));
        assert_eq!(settings.entities, None);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let settings = OrmSettings {
            proxies_namespace: Some("AppProxy".to_string()),
            ..OrmSettings::default()
        };

        let mut container = Container::new();
        settings.apply(&mut container);

        assert_eq!(
            *container.get::<String>(keys::PROXIES_NAMESPACE).unwrap(),
            "AppProxy"
        );
        assert!(!container.contains(keys::ENTITIES));
        assert!(!container.contains(keys::PROXIES_DIR));
        assert!(!container.contains(keys::AUTO_GENERATE_PROXIES));
    }

    #[test]
    fn invalid_yaml_is_a_yaml_error() {
        let err = OrmSettings::from_yaml_str("entities: 3").unwrap_err();
        assert!(matches!(err, CoreError::Yaml(_)));
    }
}
