//! View configuration
//!
//! Defines the serde schema for `config/sunburst.yaml`. Every field has a
//! default, so an empty document is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sunburst_types::DEFAULT_DEPTH_WINDOW;

use crate::error::ConfigError;
use crate::taxonomy::{
    ColorPolicy, ContrastTable, FlattenOptions, IdentityPolicy, DEFAULT_DEPTH_LEVELS,
    DEFAULT_LINE_BREAK, DEFAULT_MAX_LABEL_WIDTH,
};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunburstConfig {
    /// Characters per display label line
    pub max_label_width: usize,

    /// Marker inserted between wrapped lines
    pub line_break: String,

    /// Deepest depth a statement may sit at (3 or 4 in practice)
    pub depth_levels: usize,

    /// Rings drawn below the focused node
    pub depth_window: usize,

    pub identity: IdentityPolicy,

    pub color_policy: ColorPolicy,

    pub contrast: ContrastTable,

    pub detail_rows: DetailRowsConfig,
}

impl Default for SunburstConfig {
    fn default() -> Self {
        Self {
            max_label_width: DEFAULT_MAX_LABEL_WIDTH,
            line_break: DEFAULT_LINE_BREAK.to_string(),
            depth_levels: DEFAULT_DEPTH_LEVELS,
            depth_window: DEFAULT_DEPTH_WINDOW,
            identity: IdentityPolicy::default(),
            color_policy: ColorPolicy::default(),
            contrast: ContrastTable::default(),
            detail_rows: DetailRowsConfig::default(),
        }
    }
}

/// Shape of the placeholder detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailRowsConfig {
    pub count: usize,
    pub width: usize,
}

impl Default for DetailRowsConfig {
    fn default() -> Self {
        Self {
            count: 6,
            width: 80,
        }
    }
}

impl SunburstConfig {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Load configuration from YAML string (validated)
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not an empty map
        let config: SunburstConfig = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_label_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_label_width",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.depth_levels == 0 {
            return Err(ConfigError::InvalidValue {
                field: "depth_levels",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.depth_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "depth_window",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.detail_rows.width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "detail_rows.width",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Flattener settings derived from this config.
    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions::from(self)
    }
}

impl From<&SunburstConfig> for FlattenOptions {
    fn from(config: &SunburstConfig) -> Self {
        Self {
            max_label_width: config.max_label_width,
            line_break: config.line_break.clone(),
            depth_levels: config.depth_levels,
            identity: config.identity,
            color_policy: config.color_policy.clone(),
            contrast: config.contrast.clone(),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(SunburstConfig::from_yaml("").unwrap(), SunburstConfig::default());
        assert_eq!(SunburstConfig::from_yaml("{}").unwrap(), SunburstConfig::default());
    }

    #[test]
    fn test_load_config() {
        let yaml = r##"
max_label_width: 30
depth_levels: 4
identity: merge_by_label
color_policy:
  kind: group_keyed
detail_rows:
  count: 3
contrast:
  overrides:
    "#123456": "#FFFFFF"
"##;
        let config = SunburstConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_label_width, 30);
        assert_eq!(config.line_break, "<br>"); // default
        assert_eq!(config.depth_levels, 4);
        assert_eq!(config.depth_window, 2); // default
        assert_eq!(config.identity, IdentityPolicy::MergeByLabel);
        assert_eq!(config.color_policy, ColorPolicy::group_keyed());
        assert_eq!(config.detail_rows, DetailRowsConfig { count: 3, width: 80 });
        assert_eq!(config.contrast.text_for("#123456"), "#FFFFFF");
        assert_eq!(config.contrast.default_text, "#000000");

        let options = config.flatten_options();
        assert_eq!(options.max_label_width, 30);
        assert_eq!(options.identity, IdentityPolicy::MergeByLabel);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = SunburstConfig::from_yaml("max_label_width: 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "max_label_width",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_identity_rejected() {
        let err = SunburstConfig::from_yaml("identity: by_color").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = SunburstConfig::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/config/sunburst.yaml"
        ))
        .unwrap();
        assert_eq!(config, SunburstConfig::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SunburstConfig::load("/nonexistent/sunburst.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sunburst.yaml"));
    }
}
