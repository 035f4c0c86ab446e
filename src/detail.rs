//! Placeholder detail rows
//!
//! Stands in for text extraction behind the leaf detail panel.

use sunburst_types::NodeId;
use viewport::DetailSource;

use crate::config::DetailRowsConfig;

const FILLER: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

/// Fixed-shape filler text, deterministic per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRows {
    pub count: usize,
    pub width: usize,
}

impl Default for PlaceholderRows {
    fn default() -> Self {
        DetailRowsConfig::default().into()
    }
}

impl From<DetailRowsConfig> for PlaceholderRows {
    fn from(config: DetailRowsConfig) -> Self {
        Self {
            count: config.count,
            width: config.width,
        }
    }
}

impl PlaceholderRows {
    /// One row of exactly `width` characters.
    fn row(&self, offset: usize) -> String {
        let mut row = String::with_capacity(self.width);
        let mut word = offset;
        while row.len() < self.width {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(FILLER[word % FILLER.len()]);
            word += 1;
        }
        row.truncate(self.width);
        row
    }
}

impl DetailSource for PlaceholderRows {
    fn fetch_detail_rows(&self, id: &NodeId) -> Vec<String> {
        let seed = id.sequence().unwrap_or(0);
        (0..self.count).map(|line| self.row(seed + line * 7)).collect()
    }
}
