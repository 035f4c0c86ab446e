//! Renderer boundary: the frame we hand over and the events we get back.

use serde::{Deserialize, Serialize};

use crate::flat::FlatColumns;
use crate::node_id::NodeId;

/// Rings shown below the focus node.
pub const DEFAULT_DEPTH_WINDOW: usize = 2;

/// How the renderer sizes branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchValues {
    /// Branch value is the total of its children (our values are aggregated)
    #[default]
    Total,
}

/// What the renderer draws inside each arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextInfo {
    /// Label only, no value or percentage overlay
    #[default]
    Label,
}

/// Everything the external chart renderer needs for one draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    #[serde(flatten)]
    pub columns: FlatColumns,
    pub branchvalues: BranchValues,
    /// Focus node id; empty before the first focus
    pub level: String,
    pub maxdepth: usize,
    pub textinfo: TextInfo,
}

impl RenderFrame {
    pub fn new(columns: FlatColumns, focus: Option<&NodeId>, depth_window: usize) -> Self {
        Self {
            columns,
            branchvalues: BranchValues::Total,
            level: focus.map(NodeId::to_string).unwrap_or_default(),
            maxdepth: depth_window,
            textinfo: TextInfo::Label,
        }
    }
}

/// A click on a node, as reported by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub id: NodeId,
}

impl ClickEvent {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_wire_shape() {
        let columns = FlatColumns {
            ids: vec!["node-0".into()],
            labels: vec!["Root".into()],
            parents: vec!["".into()],
            values: vec![0],
            colors: vec!["#FFFFFF".into()],
            text_colors: vec!["#000000".into()],
        };
        let frame = RenderFrame::new(columns, Some(&NodeId::from_sequence(0)), 2);
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["ids"][0], "node-0");
        assert_eq!(json["textColors"][0], "#000000");
        assert_eq!(json["branchvalues"], "total");
        assert_eq!(json["level"], "node-0");
        assert_eq!(json["maxdepth"], 2);
        assert_eq!(json["textinfo"], "label");
    }

    #[test]
    fn test_unfocused_level_is_empty() {
        let frame = RenderFrame::new(FlatColumns::default(), None, DEFAULT_DEPTH_WINDOW);
        assert_eq!(frame.level, "");
    }
}
