//! The hierarchy literal as authored.
//!
//! Shape: `{ root: { group: { subgroup: [statement, ...] } } }`. Groups are
//! label-keyed maps, so sibling labels are unique by construction. Map order
//! is preserved because sibling order decides pre-order ids and colors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of the source tree below the root label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HierarchyNode {
    /// Plain-text statements attached to the deepest group.
    Leaves(Vec<String>),
    /// Internal label with children keyed by label.
    Group(IndexMap<String, HierarchyNode>),
}

impl HierarchyNode {
    /// Empty group.
    pub fn group() -> Self {
        Self::Group(IndexMap::new())
    }

    /// Builder-style child insertion; a no-op on a leaf list.
    pub fn with_child(mut self, label: impl Into<String>, child: HierarchyNode) -> Self {
        if let Self::Group(children) = &mut self {
            children.insert(label.into(), child);
        }
        self
    }

    /// Leaf list from anything string-like.
    pub fn leaves<I, S>(statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Leaves(statements.into_iter().map(Into::into).collect())
    }

    /// Number of leaf statements in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaves(statements) => statements.len(),
            Self::Group(children) => children.values().map(HierarchyNode::leaf_count).sum(),
        }
    }

    /// Depth of the deepest statement below this node (a leaf list is 1).
    pub fn height(&self) -> usize {
        match self {
            Self::Leaves(_) => 1,
            Self::Group(children) => {
                1 + children
                    .values()
                    .map(HierarchyNode::height)
                    .max()
                    .unwrap_or(0)
            }
        }
    }
}
