//! Node identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every generated identifier.
const NODE_ID_PREFIX: &str = "node-";

/// Identifier of a flattened node.
///
/// Generated ids are sequential in pre-order (`node-0` is always the root).
/// Ids arriving from the renderer are wrapped as-is; whether they exist is
/// a question for the `NodeIndex`, not for this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an arbitrary identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for the n-th allocated node.
    pub fn from_sequence(n: usize) -> Self {
        Self(format!("{NODE_ID_PREFIX}{n}"))
    }

    /// Sequence number, if this id was produced by `from_sequence`.
    pub fn sequence(&self) -> Option<usize> {
        self.0.strip_prefix(NODE_ID_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_round_trip() {
        let id = NodeId::from_sequence(12);
        assert_eq!(id.as_str(), "node-12");
        assert_eq!(id.sequence(), Some(12));
    }

    #[test]
    fn test_foreign_id_has_no_sequence() {
        assert_eq!(NodeId::new("abc").sequence(), None);
        assert_eq!(NodeId::new("node-x").sequence(), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::from_sequence(3)).unwrap();
        assert_eq!(json, "\"node-3\"");
    }
}
