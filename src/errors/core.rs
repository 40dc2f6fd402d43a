use thiserror::Error;

/// Core error type for the ORM bootstrap layer.
///
/// Every variant is synchronous and non-retryable: an error aborts the
/// affected operation and leaves no committed lazy value behind.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid connection: {message}")]
    InvalidConnection { message: String },

    #[error("\"{kind}\" is not a recognized metadata driver")]
    UnrecognizedSourceKind { kind: String },

    #[error("service not found: {key}")]
    ServiceNotFound { key: String },

    #[error("type mismatch for '{key}': expected {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a new invalid connection error
    pub fn invalid_connection(message: impl Into<String>) -> Self {
        Self::InvalidConnection {
            message: message.into(),
        }
    }

    /// Create a new unrecognized source kind error
    pub fn unrecognized_source_kind(kind: impl Into<String>) -> Self {
        Self::UnrecognizedSourceKind { kind: kind.into() }
    }

    /// Create a new service not found error
    pub fn service_not_found(key: impl Into<String>) -> Self {
        Self::ServiceNotFound { key: key.into() }
    }

    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if the error is an invalid connection error
    pub fn is_invalid_connection(&self) -> bool {
        matches!(self, Self::InvalidConnection { .. })
    }

    /// Check if the error is an unrecognized source kind error
    pub fn is_unrecognized_source_kind(&self) -> bool {
        matches!(self, Self::UnrecognizedSourceKind { .. })
    }

    /// Check if the error is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
