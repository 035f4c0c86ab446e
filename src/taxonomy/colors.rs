//! Color palettes for the sunburst
//!
//! Fill colors come from a `ColorPolicy`; text colors come from an explicit
//! fill -> text contrast table, never from inline conditionals.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// FIXED COLORS
// =============================================================================

/// Root fill
pub const ROOT_FILL: &str = "#FFFFFF";

/// Root text (dark on white)
pub const ROOT_TEXT: &str = "#000000";

/// Fallback fill for depths or groups without a palette entry
pub const NEUTRAL_GRAY: &str = "#BDBDBD";

pub const TEXT_LIGHT: &str = "#FFFFFF";
pub const TEXT_DARK: &str = "#000000";

// =============================================================================
// DEPTH-ALTERNATING PALETTE
// =============================================================================

/// Two fills per depth (1..=3), picked by sibling index modulo 2.
pub const DEPTH_PALETTE: [[&str; 2]; 3] = [
    ["#C2185B", "#F48FB1"], // Pink-700 / Pink-200
    ["#E91E63", "#F8BBD0"], // Pink-500 / Pink-100
    ["#AD1457", "#FCE4EC"], // Pink-800 / Pink-50
];

// =============================================================================
// GROUP-KEYED PALETTES
// =============================================================================

/// Depth 1/2/3 fills for one top-level group.
pub type GroupPalette = [String; 3];

fn palette(depth1: &str, depth2: &str, depth3: &str) -> GroupPalette {
    [depth1.to_string(), depth2.to_string(), depth3.to_string()]
}

/// Palettes for the top-level groups of the bundled taxonomy.
pub fn default_group_palettes() -> IndexMap<String, GroupPalette> {
    let mut groups = IndexMap::new();
    groups.insert(
        "Revenue Mobilisation".to_string(),
        palette("#C2185B", "#F06292", "#F8BBD0"), // Pink
    );
    groups.insert(
        "Expenditure Efficiency".to_string(),
        palette("#1565C0", "#64B5F6", "#BBDEFB"), // Blue
    );
    groups.insert(
        "Debt Sustainability".to_string(),
        palette("#2E7D32", "#81C784", "#C8E6C9"), // Green
    );
    groups.insert(
        "Fiscal Governance".to_string(),
        palette("#EF6C00", "#FFB74D", "#FFE0B2"), // Orange
    );
    groups
}

/// How fill colors are chosen. One policy per view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Fixed 2-color palette per depth, alternating by sibling index
    #[default]
    DepthAlternating,
    /// Top-level group label -> depth 1/2/3 palette, inherited by descendants
    GroupKeyed {
        #[serde(default = "default_group_palettes")]
        groups: IndexMap<String, GroupPalette>,
    },
}

impl ColorPolicy {
    pub fn group_keyed() -> Self {
        Self::GroupKeyed {
            groups: default_group_palettes(),
        }
    }

    /// Fill for a non-root node.
    ///
    /// `top_group` is the label of the node's depth-1 ancestor (the node
    /// itself at depth 1).
    pub fn fill_for(&self, depth: usize, sibling_index: usize, top_group: &str) -> &str {
        if depth == 0 {
            return ROOT_FILL;
        }
        match self {
            ColorPolicy::DepthAlternating => DEPTH_PALETTE
                .get(depth - 1)
                .map(|pair| pair[sibling_index % 2])
                .unwrap_or(NEUTRAL_GRAY),
            ColorPolicy::GroupKeyed { groups } => groups
                .get(top_group)
                .and_then(|palette| palette.get(depth - 1))
                .map(String::as_str)
                .unwrap_or(NEUTRAL_GRAY),
        }
    }
}

// =============================================================================
// CONTRAST TABLE
// =============================================================================

/// Fill -> text color lookup.
///
/// Fills listed in `overrides` use the mapped text color; everything else
/// uses `default_text`. Keys compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastTable {
    #[serde(default = "default_text")]
    pub default_text: String,
    #[serde(default)]
    pub overrides: IndexMap<String, String>,
}

fn default_text() -> String {
    TEXT_DARK.to_string()
}

impl Default for ContrastTable {
    /// White text on the strong fills, black elsewhere.
    fn default() -> Self {
        let strong = [
            // Pinks
            "#C2185B", "#E91E63", "#AD1457", "#F06292",
            // Group palettes, depth 1
            "#1565C0", "#2E7D32", "#EF6C00",
        ];
        Self {
            default_text: default_text(),
            overrides: strong
                .iter()
                .map(|fill| (fill.to_string(), TEXT_LIGHT.to_string()))
                .collect(),
        }
    }
}

impl ContrastTable {
    pub fn text_for(&self, fill: &str) -> &str {
        if fill.eq_ignore_ascii_case(ROOT_FILL) {
            return ROOT_TEXT;
        }
        self.overrides
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(fill))
            .map(|(_, text)| text.as_str())
            .unwrap_or(self.default_text.as_str())
    }
}
