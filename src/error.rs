//! Error types for the challenge sunburst
//!
//! Flattening and configuration each get their own thiserror enum;
//! `SunburstError` ties them together with I/O and parse failures for
//! callers that load files.

use thiserror::Error;

/// Main error type for loading and flattening
#[derive(Error, Debug)]
pub enum SunburstError {
    #[error("Flatten error: {0}")]
    Flatten(#[from] FlattenError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural problems found while flattening a hierarchy literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// The literal does not have the expected tree shape
    #[error("Malformed hierarchy: {reason}")]
    MalformedHierarchy { reason: String },

    /// A label reappears among its own ancestors
    #[error("Invalid hierarchy: label '{label}' revisited along path {}", path.join(" > "))]
    InvalidHierarchy {
        /// Repeated label
        label: String,
        /// Labels from the root down to (excluding) the repeated one
        path: Vec<String>,
    },
}

impl FlattenError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedHierarchy {
            reason: reason.into(),
        }
    }

    /// Get an error code for this error type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedHierarchy { .. } => "MALFORMED_HIERARCHY",
            Self::InvalidHierarchy { .. } => "INVALID_HIERARCHY",
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hierarchy_message_shows_path() {
        let err = FlattenError::InvalidHierarchy {
            label: "Debt".to_string(),
            path: vec!["Root".to_string(), "Debt".to_string(), "Stock".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid hierarchy: label 'Debt' revisited along path Root > Debt > Stock"
        );
        assert_eq!(err.code(), "INVALID_HIERARCHY");
    }

    #[test]
    fn test_flatten_error_converts() {
        let err: SunburstError = FlattenError::malformed("no root").into();
        assert!(matches!(err, SunburstError::Flatten(_)));
        assert_eq!(err.to_string(), "Flatten error: Malformed hierarchy: no root");
    }
}
