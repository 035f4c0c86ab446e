//! Tree flattener
//!
//! Turns a `Taxonomy` into the pre-ordered `FlatHierarchy` the renderer and
//! the navigation state machine consume:
//! - ids are allocated sequentially on first sight of an identity key
//! - display labels are soft-wrapped
//! - fill and text colors come from the configured policy and contrast table
//! - values are aggregated bottom-up once the whole tree has been visited
//!
//! Structural problems are returned as `FlattenError`, never papered over.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sunburst_types::{FlatHierarchy, FlatNode, HierarchyNode, NodeId};

use super::colors::{ColorPolicy, ContrastTable};
use super::literal::Taxonomy;
use super::wrap::{wrap_label, DEFAULT_LINE_BREAK, DEFAULT_MAX_LABEL_WIDTH};
use crate::error::FlattenError;

/// Default grouping depth: root > group > subgroup > statement.
pub const DEFAULT_DEPTH_LEVELS: usize = 3;

/// Joins label segments in path-qualified identity keys.
const PATH_KEY_SEPARATOR: char = '\u{1f}';

/// What makes two occurrences "the same node".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Full label path from the root; equal labels in different branches
    /// stay distinct
    #[default]
    PathQualified,
    /// Exact label text anywhere in the tree; repeats merge into the first
    /// occurrence
    MergeByLabel,
}

/// Flattener settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenOptions {
    pub max_label_width: usize,
    pub line_break: String,
    /// Deepest depth a statement may sit at
    pub depth_levels: usize,
    pub identity: IdentityPolicy,
    pub color_policy: ColorPolicy,
    pub contrast: ContrastTable,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_label_width: DEFAULT_MAX_LABEL_WIDTH,
            line_break: DEFAULT_LINE_BREAK.to_string(),
            depth_levels: DEFAULT_DEPTH_LEVELS,
            identity: IdentityPolicy::default(),
            color_policy: ColorPolicy::default(),
            contrast: ContrastTable::default(),
        }
    }
}

/// Flattens taxonomies with fixed options.
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flatten a taxonomy into pre-ordered nodes plus index.
    pub fn flatten(&self, taxonomy: &Taxonomy) -> Result<FlatHierarchy, FlattenError> {
        let mut builder = Builder::new(&self.options);
        builder.visit_root(taxonomy)?;
        let merged = builder.merged;
        let nodes = builder.finish();

        let flat = FlatHierarchy::new(nodes)
            .ok_or_else(|| FlattenError::malformed("hierarchy produced no nodes"))?;
        tracing::info!(
            root = taxonomy.root_label(),
            nodes = flat.len(),
            statements = flat.root().value,
            leaf_depth = flat.index().leaf_depth(),
            merged,
            "flattened taxonomy"
        );
        Ok(flat)
    }
}

/// Per-node bookkeeping that does not belong in `FlatNode`.
struct NodeMeta {
    is_statement: bool,
    /// Label of the depth-1 ancestor (own label at depth 1, empty for root)
    top_group: String,
}

/// Single-use traversal state.
struct Builder<'o> {
    options: &'o FlattenOptions,
    nodes: Vec<FlatNode>,
    meta: Vec<NodeMeta>,
    positions: HashMap<NodeId, usize>,
    /// Identity key -> id
    cache: HashMap<String, NodeId>,
    /// Labels from the root down to the node being visited
    path: Vec<String>,
    /// Occurrences folded into an earlier node
    merged: usize,
    /// Depth shared by every statement, fixed by the first one
    statement_depth: Option<usize>,
    /// Deepest group allocated so far
    deepest_group: usize,
}

impl<'o> Builder<'o> {
    fn new(options: &'o FlattenOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            meta: Vec::new(),
            positions: HashMap::new(),
            cache: HashMap::new(),
            path: Vec::new(),
            merged: 0,
            statement_depth: None,
            deepest_group: 0,
        }
    }

    fn visit_root(&mut self, taxonomy: &Taxonomy) -> Result<(), FlattenError> {
        let label = taxonomy.root_label();
        check_label(label, "root")?;

        let root = self.alloc(label, None, 0, 0, false, String::new());
        self.path.push(label.to_string());
        let result = self.visit_node(root, taxonomy.root());
        self.path.pop();
        result
    }

    /// Visit the contents (`node`) of the already-allocated node at `pos`.
    fn visit_node(&mut self, pos: usize, node: &HierarchyNode) -> Result<(), FlattenError> {
        match node {
            HierarchyNode::Group(children) => self.visit_group(pos, children),
            HierarchyNode::Leaves(statements) => self.visit_statements(pos, statements),
        }
    }

    fn visit_group(
        &mut self,
        parent: usize,
        children: &IndexMap<String, HierarchyNode>,
    ) -> Result<(), FlattenError> {
        for (sibling_index, (label, child)) in children.iter().enumerate() {
            let pos = self.enter(parent, label, sibling_index, false)?;
            self.path.push(label.clone());
            let result = self.visit_node(pos, child);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn visit_statements(&mut self, parent: usize, statements: &[String]) -> Result<(), FlattenError> {
        for (sibling_index, statement) in statements.iter().enumerate() {
            self.enter(parent, statement, sibling_index, true)?;
        }
        Ok(())
    }

    /// Validate a child occurrence and resolve it to a node position,
    /// allocating a new node or reusing a merged one.
    fn enter(
        &mut self,
        parent: usize,
        label: &str,
        sibling_index: usize,
        is_statement: bool,
    ) -> Result<usize, FlattenError> {
        check_label(label, if is_statement { "statement" } else { "group" })?;

        if self.path.iter().any(|ancestor| ancestor == label) {
            return Err(FlattenError::InvalidHierarchy {
                label: label.to_string(),
                path: self.path.clone(),
            });
        }

        let depth = self.nodes[parent].depth + 1;
        if depth > self.options.depth_levels {
            return Err(FlattenError::malformed(format!(
                "'{}' sits at depth {} but the hierarchy allows {} levels (path: {})",
                label,
                depth,
                self.options.depth_levels,
                self.path.join(" > ")
            )));
        }

        let key = self.identity_key(label);
        if let Some(existing) = self.cache.get(&key) {
            let pos = self.positions[existing];
            if self.meta[pos].is_statement != is_statement {
                return Err(FlattenError::malformed(format!(
                    "'{}' is used both as a statement and as a group; merge_by_label cannot unify them (path: {})",
                    label,
                    self.path.join(" > ")
                )));
            }
            self.merged += 1;
            tracing::warn!(
                label,
                id = %existing,
                first_parent = ?self.nodes[pos].parent,
                "label reused: merging into existing node"
            );
            return Ok(pos);
        }

        self.check_ring(label, depth, is_statement)?;
        let top_group = if depth == 1 {
            label.to_string()
        } else {
            self.meta[parent].top_group.clone()
        };
        let pos = self.alloc(label, Some(parent), depth, sibling_index, is_statement, top_group);
        let child_id = self.nodes[pos].id.clone();
        self.nodes[parent].children.push(child_id);
        Ok(pos)
    }

    /// Statements form one outer ring: they all share a depth and no group
    /// reaches it.
    fn check_ring(
        &mut self,
        label: &str,
        depth: usize,
        is_statement: bool,
    ) -> Result<(), FlattenError> {
        let conflict = match (is_statement, self.statement_depth) {
            (true, Some(ring)) if depth != ring => Some(format!(
                "statement '{label}' sits at depth {depth} but earlier statements sit at depth {ring}"
            )),
            (true, None) if self.deepest_group >= depth => Some(format!(
                "statement '{label}' sits at depth {depth} but groups already reach depth {}",
                self.deepest_group
            )),
            (false, Some(ring)) if depth >= ring => Some(format!(
                "group '{label}' sits at depth {depth} but statements sit at depth {ring}"
            )),
            _ => None,
        };
        if let Some(message) = conflict {
            return Err(FlattenError::malformed(format!(
                "{message}; statements must all sit at one depth (path: {})",
                self.path.join(" > ")
            )));
        }

        if is_statement {
            self.statement_depth = Some(depth);
        } else {
            self.deepest_group = self.deepest_group.max(depth);
        }
        Ok(())
    }

    fn identity_key(&self, label: &str) -> String {
        match self.options.identity {
            IdentityPolicy::MergeByLabel => label.to_string(),
            IdentityPolicy::PathQualified => {
                let mut key = String::new();
                for segment in &self.path {
                    key.push_str(segment);
                    key.push(PATH_KEY_SEPARATOR);
                }
                key.push_str(label);
                key
            }
        }
    }

    fn alloc(
        &mut self,
        label: &str,
        parent: Option<usize>,
        depth: usize,
        sibling_index: usize,
        is_statement: bool,
        top_group: String,
    ) -> usize {
        let id = NodeId::from_sequence(self.nodes.len());
        let color = self
            .options
            .color_policy
            .fill_for(depth, sibling_index, &top_group)
            .to_string();
        let text_color = self.options.contrast.text_for(&color).to_string();
        let display_label = wrap_label(label, self.options.max_label_width, &self.options.line_break);
        let parent_id = parent.map(|p| self.nodes[p].id.clone());

        let pos = self.nodes.len();
        let key = self.identity_key(label);
        self.cache.insert(key, id.clone());
        self.positions.insert(id.clone(), pos);
        tracing::debug!(%id, label, depth, %color, "node allocated");

        self.nodes.push(FlatNode {
            id,
            label: label.to_string(),
            display_label,
            parent: parent_id,
            value: 0,
            color,
            text_color,
            depth,
            children: Vec::new(),
        });
        self.meta.push(NodeMeta {
            is_statement,
            top_group,
        });
        pos
    }

    /// Aggregate values and hand over the nodes.
    ///
    /// Children are always allocated after their parent, so walking the
    /// pre-order backwards sees every subtree complete before its root.
    fn finish(mut self) -> Vec<FlatNode> {
        for pos in (0..self.nodes.len()).rev() {
            let value = if self.nodes[pos].children.is_empty() {
                u32::from(self.meta[pos].is_statement)
            } else {
                self.nodes[pos]
                    .children
                    .iter()
                    .map(|child| self.nodes[self.positions[child]].value)
                    .sum()
            };
            self.nodes[pos].value = value;
        }
        self.nodes
    }
}

fn check_label(label: &str, kind: &str) -> Result<(), FlattenError> {
    if label.trim().is_empty() {
        Err(FlattenError::malformed(format!("blank {kind} label")))
    } else {
        Ok(())
    }
}
