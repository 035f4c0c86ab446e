//! Flattened hierarchy and its navigation index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node_id::NodeId;

/// One row of the flattened hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    pub id: NodeId,
    /// Label as authored (used for breadcrumbs and label lookups)
    pub label: String,
    /// Label with soft line breaks inserted (what the renderer draws)
    pub display_label: String,
    /// `None` only for the root
    pub parent: Option<NodeId>,
    /// 1 for a leaf, sum of children otherwise
    pub value: u32,
    pub color: String,
    pub text_color: String,
    /// 0 = root
    pub depth: usize,
    pub children: Vec<NodeId>,
}

impl FlatNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The parallel arrays a sunburst renderer consumes.
///
/// All vectors have the same length and share the pre-order of the source
/// nodes. The root's parent is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatColumns {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u32>,
    pub colors: Vec<String>,
    pub text_colors: Vec<String>,
}

impl FlatColumns {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Index entry: everything navigation needs to know about a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    pub label: String,
    pub display_label: String,
    pub parent: Option<NodeId>,
    pub depth: usize,
    pub children: Vec<NodeId>,
}

/// Immutable id -> entry lookup built once from the flattened nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeIndex {
    root: NodeId,
    max_depth: usize,
    entries: HashMap<NodeId, IndexEntry>,
}

impl NodeIndex {
    /// Build from pre-ordered nodes. The first node must be the root.
    ///
    /// Returns `None` for an empty slice.
    pub fn build(nodes: &[FlatNode]) -> Option<Self> {
        let root = nodes.first()?.id.clone();
        let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let entries = nodes
            .iter()
            .map(|n| {
                (
                    n.id.clone(),
                    IndexEntry {
                        label: n.label.clone(),
                        display_label: n.display_label.clone(),
                        parent: n.parent.clone(),
                        depth: n.depth,
                        children: n.children.clone(),
                    },
                )
            })
            .collect();
        Some(Self {
            root,
            max_depth,
            entries,
        })
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root
    }

    /// Deepest depth present; statements of a full literal sit here.
    pub fn leaf_depth(&self) -> usize {
        self.max_depth
    }

    pub fn get(&self, id: &NodeId) -> Option<&IndexEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.entries.get(id)?.parent.as_ref()
    }

    pub fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.entries.get(id).map(|e| e.depth)
    }

    pub fn children_of(&self, id: &NodeId) -> &[NodeId] {
        self.entries
            .get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Ids from the root down to `id`, inclusive at both ends.
    ///
    /// Empty when `id` is unknown. The walk is bounded by the index size so
    /// a corrupted parent chain cannot loop.
    pub fn lineage(&self, id: &NodeId) -> Vec<&NodeId> {
        let mut path = Vec::new();
        let Some((mut current, _)) = self.entries.get_key_value(id) else {
            return path;
        };
        path.push(current);
        while let Some(parent) = self.parent_of(current) {
            if path.len() > self.entries.len() {
                break;
            }
            let Some((key, _)) = self.entries.get_key_value(parent) else {
                break;
            };
            path.push(key);
            current = key;
        }
        path.reverse();
        path
    }

    /// Iterate over all `(id, entry)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &IndexEntry)> {
        self.entries.iter()
    }
}

/// Flattener output: pre-ordered nodes plus the navigation index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatHierarchy {
    nodes: Vec<FlatNode>,
    index: NodeIndex,
}

impl FlatHierarchy {
    /// Returns `None` for an empty node list.
    pub fn new(nodes: Vec<FlatNode>) -> Option<Self> {
        let index = NodeIndex::build(&nodes)?;
        Some(Self { nodes, index })
    }

    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    pub fn root(&self) -> &FlatNode {
        // `new` refuses an empty list
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&FlatNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// First node (pre-order) whose raw label matches exactly.
    pub fn find_by_label(&self, label: &str) -> Option<&FlatNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Parallel renderer columns in pre-order.
    pub fn columns(&self) -> FlatColumns {
        let mut columns = FlatColumns::default();
        for node in &self.nodes {
            columns.ids.push(node.id.to_string());
            columns.labels.push(node.display_label.clone());
            columns.parents.push(
                node.parent
                    .as_ref()
                    .map(NodeId::to_string)
                    .unwrap_or_default(),
            );
            columns.values.push(node.value);
            columns.colors.push(node.color.clone());
            columns.text_colors.push(node.text_color.clone());
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(
        seq: usize,
        label: &str,
        parent: Option<usize>,
        depth: usize,
        children: &[usize],
    ) -> FlatNode {
        FlatNode {
            id: NodeId::from_sequence(seq),
            label: label.to_string(),
            display_label: label.to_string(),
            parent: parent.map(NodeId::from_sequence),
            value: children.len().max(1) as u32,
            color: "#FFFFFF".to_string(),
            text_color: "#000000".to_string(),
            depth,
            children: children.iter().copied().map(NodeId::from_sequence).collect(),
        }
    }

    fn sample() -> FlatHierarchy {
        FlatHierarchy::new(vec![
            node(0, "R", None, 0, &[1]),
            node(1, "A", Some(0), 1, &[2]),
            node(2, "B", Some(1), 2, &[3]),
            node(3, "C", Some(2), 3, &[]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_nodes_rejected() {
        assert!(FlatHierarchy::new(Vec::new()).is_none());
    }

    #[test]
    fn test_index_lookups() {
        let flat = sample();
        let index = flat.index();
        assert_eq!(index.root_id(), &NodeId::from_sequence(0));
        assert_eq!(index.leaf_depth(), 3);
        assert_eq!(index.len(), 4);
        assert_eq!(index.depth_of(&NodeId::from_sequence(2)), Some(2));
        assert_eq!(
            index.parent_of(&NodeId::from_sequence(2)),
            Some(&NodeId::from_sequence(1))
        );
        assert!(index.children_of(&NodeId::new("missing")).is_empty());
    }

    #[test]
    fn test_lineage_root_to_node() {
        let flat = sample();
        let lineage: Vec<String> = flat
            .index()
            .lineage(&NodeId::from_sequence(3))
            .into_iter()
            .map(NodeId::to_string)
            .collect();
        assert_eq!(lineage, vec!["node-0", "node-1", "node-2", "node-3"]);
        assert!(flat.index().lineage(&NodeId::new("nope")).is_empty());
    }

    #[test]
    fn test_columns_are_parallel() {
        let columns = sample().columns();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns.parents, vec!["", "node-0", "node-1", "node-2"]);
        assert_eq!(columns.labels, vec!["R", "A", "B", "C"]);
        assert_eq!(columns.values.len(), columns.text_colors.len());
    }

    #[test]
    fn test_columns_serialize_camel_case() {
        let json = serde_json::to_value(sample().columns()).unwrap();
        assert!(json.get("textColors").is_some());
        assert!(json.get("text_colors").is_none());
    }
}
