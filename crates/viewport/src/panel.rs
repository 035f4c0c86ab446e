//! Detail panel shown for leaf statements.

use serde::{Deserialize, Serialize};
use sunburst_types::NodeId;

/// Source of the rows shown when a leaf is clicked.
///
/// Implementations stand in for text extraction; the state machine only
/// cares that it gets an ordered list of display strings.
pub trait DetailSource {
    fn fetch_detail_rows(&self, id: &NodeId) -> Vec<String>;
}

impl<F> DetailSource for F
where
    F: Fn(&NodeId) -> Vec<String>,
{
    fn fetch_detail_rows(&self, id: &NodeId) -> Vec<String> {
        self(id)
    }
}

/// Auxiliary panel state, orthogonal to focus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailPanel {
    #[default]
    Closed,
    Open {
        /// Leaf the rows belong to
        node: NodeId,
        rows: Vec<String>,
    },
}

impl DetailPanel {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailPanel::Open { .. })
    }

    /// Rows on display; empty when closed.
    pub fn rows(&self) -> &[String] {
        match self {
            DetailPanel::Closed => &[],
            DetailPanel::Open { rows, .. } => rows,
        }
    }

    pub fn node(&self) -> Option<&NodeId> {
        match self {
            DetailPanel::Closed => None,
            DetailPanel::Open { node, .. } => Some(node),
        }
    }

    /// Close and drop the rows.
    pub fn close(&mut self) {
        *self = DetailPanel::Closed;
    }
}
