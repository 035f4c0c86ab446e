//! Taxonomy literal loading
//!
//! A taxonomy is a single-rooted `HierarchyNode` tree:
//!
//! ```yaml
//! Public Finance Challenges:
//!   Revenue Mobilisation:
//!     Tax Base Erosion:
//!       - "Broaden the personal income tax base"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use sunburst_types::HierarchyNode;

use crate::error::{FlattenError, SunburstError};

/// Bundled public finance challenge taxonomy.
const BUNDLED_TAXONOMY: &str = include_str!("../../data/public_finance_challenges.yaml");

/// A hierarchy literal with its single root label split out.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    root_label: String,
    root: HierarchyNode,
}

impl Taxonomy {
    pub fn new(root_label: impl Into<String>, root: HierarchyNode) -> Self {
        Self {
            root_label: root_label.into(),
            root,
        }
    }

    /// Accept a parsed literal with exactly one top-level key.
    pub fn from_literal(literal: IndexMap<String, HierarchyNode>) -> Result<Self, FlattenError> {
        if literal.len() != 1 {
            return Err(FlattenError::malformed(format!(
                "expected exactly one root label, found {}",
                literal.len()
            )));
        }
        let (root_label, root) = literal
            .into_iter()
            .next()
            .ok_or_else(|| FlattenError::malformed("empty literal"))?;
        Ok(Self { root_label, root })
    }

    /// Parse a YAML literal
    pub fn from_yaml(yaml: &str) -> Result<Self, SunburstError> {
        let literal: IndexMap<String, HierarchyNode> = serde_yaml::from_str(yaml)?;
        Ok(Self::from_literal(literal)?)
    }

    /// Parse a JSON literal
    pub fn from_json(json: &str) -> Result<Self, SunburstError> {
        let literal: IndexMap<String, HierarchyNode> = serde_json::from_str(json)?;
        Ok(Self::from_literal(literal)?)
    }

    /// Load from a file; `.json` is parsed as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SunburstError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// The taxonomy compiled into the crate.
    pub fn bundled() -> Result<Self, SunburstError> {
        Self::from_yaml(BUNDLED_TAXONOMY)
    }

    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub fn root(&self) -> &HierarchyNode {
        &self.root
    }

    /// Total leaf statements in the literal.
    pub fn statement_count(&self) -> usize {
        self.root.leaf_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_parses() {
        let taxonomy = Taxonomy::bundled().unwrap();
        assert_eq!(taxonomy.root_label(), "Public Finance Challenges");
        assert!(taxonomy.statement_count() > 0);
        assert_eq!(taxonomy.root().height(), 3);
    }

    #[test]
    fn test_two_roots_rejected() {
        let err = Taxonomy::from_yaml("A: [x]\nB: [y]\n").unwrap_err();
        assert!(matches!(
            err,
            SunburstError::Flatten(FlattenError::MalformedHierarchy { .. })
        ));
    }

    #[test]
    fn test_scalar_rejected_by_parser() {
        let err = Taxonomy::from_yaml("Root:\n  A: 42\n").unwrap_err();
        assert!(matches!(err, SunburstError::Yaml(_)));
    }

    #[test]
    fn test_json_literal() {
        let taxonomy = Taxonomy::from_json(r#"{"R": {"A": {"B": ["C"]}}}"#).unwrap();
        assert_eq!(taxonomy.root_label(), "R");
        assert_eq!(taxonomy.statement_count(), 1);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("t.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(file, r#"{{"R": {{"A": ["x", "y"]}}}}"#).unwrap();
        assert_eq!(Taxonomy::load(&json_path).unwrap().statement_count(), 2);

        let yaml_path = dir.path().join("t.yaml");
        std::fs::write(&yaml_path, "R:\n  A:\n    - x\n").unwrap();
        assert_eq!(Taxonomy::load(&yaml_path).unwrap().statement_count(), 1);
    }
}
