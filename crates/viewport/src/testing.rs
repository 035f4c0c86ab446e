//! Index fixtures shared by the unit tests.

use sunburst_types::{FlatNode, NodeId, NodeIndex};

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
        value: 1,
        color: "#FFFFFF".to_string(),
        text_color: "#000000".to_string(),
        depth,
        children: children.iter().copied().map(NodeId::from_sequence).collect(),
    }
}

/// ```text
/// node-0 R
/// ├── node-1 A
/// │   ├── node-2 B
/// │   │   ├── node-3 C
/// │   │   └── node-4 D
/// │   └── node-5 E
/// │       └── node-6 F
/// └── node-7 G
///     └── node-8 H
///         └── node-9 I
/// ```
pub(crate) fn sample_index() -> NodeIndex {
    let nodes = vec![
        node(0, "R", None, 0, &[1, 7]),
        node(1, "A", Some(0), 1, &[2, 5]),
        node(2, "B", Some(1), 2, &[3, 4]),
        node(3, "C", Some(2), 3, &[]),
        node(4, "D", Some(2), 3, &[]),
        node(5, "E", Some(1), 2, &[6]),
        node(6, "F", Some(5), 3, &[]),
        node(7, "G", Some(0), 1, &[8]),
        node(8, "H", Some(7), 2, &[9]),
        node(9, "I", Some(8), 3, &[]),
    ];
    NodeIndex::build(&nodes).expect("fixture is non-empty")
}

pub(crate) fn id(seq: usize) -> NodeId {
    NodeId::from_sequence(seq)
}
