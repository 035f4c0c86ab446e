//! Sunburst Types - shared boundary types for the challenge sunburst.
//!
//! This crate is the single source of truth for the data that crosses
//! component boundaries:
//! - `HierarchyNode` - the nested taxonomy literal as authored
//! - `NodeId` - sequential node identifiers (`node-0`, `node-1`, ...)
//! - `FlatNode` / `FlatHierarchy` - pre-order flattened output
//! - `NodeIndex` - immutable id -> {label, parent, depth, children} lookup
//! - `RenderFrame` - what the external chart renderer receives
//! - `ClickEvent` - what the external chart renderer emits
//!
//! # Architecture
//!
//! ```text
//! HierarchyNode tree
//!   └── (flattener) ──► FlatHierarchy
//!                        ├── nodes: Vec<FlatNode>   (pre-order, parallel columns)
//!                        └── index: NodeIndex       (navigation lookups)
//!
//! FlatHierarchy + focus ──► RenderFrame ──► renderer ──► ClickEvent
//! ```

mod flat;
mod hierarchy;
mod node_id;
mod render;

pub use flat::{FlatColumns, FlatHierarchy, FlatNode, IndexEntry, NodeIndex};
pub use hierarchy::HierarchyNode;
pub use node_id::NodeId;
pub use render::{BranchValues, ClickEvent, RenderFrame, TextInfo, DEFAULT_DEPTH_WINDOW};
