//! Navigation state and the click handler
//!
//! `NavigationState` holds the focus and the detail panel. It is mutated
//! only through `handle_click` (plus the explicit helpers the host uses for
//! initial focus and dismissing the panel). Every call is synchronous and
//! runs to completion before the next click is looked at.

use serde::Serialize;
use sunburst_types::{NodeId, NodeIndex};

use crate::focus::{apply_transition, FocusState, FocusTransition};
use crate::panel::{DetailPanel, DetailSource};
use crate::transitions::{classify_click, describe_focus, ClickTarget, TransitionError};

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Focus moved to `to` (zoom in, or back to the root)
    Refocused { from: Option<NodeId>, to: NodeId },
    /// Clicked the focused node: focus moved up to its parent
    Collapsed { from: NodeId, to: NodeId },
    /// Leaf clicked: panel opened, focus unchanged
    PanelOpened { node: NodeId, rows: usize },
    /// Id not in the index; nothing changed
    Ignored { id: NodeId },
}

impl ClickOutcome {
    pub fn changed_state(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored { .. })
    }
}

/// Serializable view of the state for hosts and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationSnapshot {
    pub focus: FocusState,
    pub breadcrumbs: Vec<String>,
    pub panel: DetailPanel,
}

/// Focus + detail panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    focus: FocusState,
    panel: DetailPanel,

    /// Whether state changed since the host last rendered
    pub dirty: bool,
}

impl NavigationState {
    /// Create a new state with default (unfocused, panel closed) values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state already focused on the index root
    pub fn focused_on_root(index: &NodeIndex) -> Self {
        Self {
            focus: FocusState::FocusedAt(index.root_id().clone()),
            dirty: true,
            ..Self::default()
        }
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn focus_id(&self) -> Option<&NodeId> {
        self.focus.id()
    }

    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    /// Dismiss the detail panel without touching focus.
    pub fn close_panel(&mut self) {
        if self.panel.is_open() {
            self.panel.close();
            self.dirty = true;
        }
    }

    /// Mark the state as rendered
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Apply one renderer click.
    pub fn handle_click(
        &mut self,
        index: &NodeIndex,
        id: &NodeId,
        details: &dyn DetailSource,
    ) -> ClickOutcome {
        let Some(target) = classify_click(index, id) else {
            let miss = TransitionError::UnknownNode(id.clone());
            tracing::warn!(code = miss.code(), node = %id, "click ignored: {}", miss);
            return ClickOutcome::Ignored { id: id.clone() };
        };

        let from = self.focus.id().cloned();
        let transition = match target {
            ClickTarget::Root => FocusTransition::FocusRoot,
            ClickTarget::Internal { .. } if self.focus.is_focused_on(id) => FocusTransition::Ascend,
            ClickTarget::Internal { .. } => FocusTransition::FocusNode(id.clone()),
            ClickTarget::Leaf => {
                let rows = details.fetch_detail_rows(id);
                let count = rows.len();
                self.panel = DetailPanel::Open {
                    node: id.clone(),
                    rows,
                };
                self.dirty = true;
                tracing::debug!(node = %id, rows = count, "detail panel opened");
                return ClickOutcome::PanelOpened {
                    node: id.clone(),
                    rows: count,
                };
            }
        };

        let collapsing = transition == FocusTransition::Ascend;
        let to = match apply_transition(&mut self.focus, index, transition) {
            Ok(focus) => focus.id().cloned(),
            Err(err) => {
                tracing::warn!(code = err.code(), node = %id, "click ignored: {}", err);
                return ClickOutcome::Ignored { id: id.clone() };
            }
        };
        self.panel.close();

        let to = to.unwrap_or_else(|| index.root_id().clone());
        let outcome = match from {
            Some(from) if collapsing => ClickOutcome::Collapsed { from, to },
            from => ClickOutcome::Refocused { from, to },
        };

        self.dirty = true;
        tracing::debug!(
            ?outcome,
            focus = %describe_focus(&self.focus, index),
            "click handled"
        );
        outcome
    }

    /// Labels from just below the root down to the focus, inclusive.
    ///
    /// Empty when unfocused, when focused on the root, or when the focus is
    /// not in the index.
    pub fn breadcrumbs(&self, index: &NodeIndex) -> Vec<String> {
        let Some(focus) = self.focus.id() else {
            return Vec::new();
        };
        index
            .lineage(focus)
            .into_iter()
            .skip(1)
            .filter_map(|id| index.get(id).map(|entry| entry.label.clone()))
            .collect()
    }

    pub fn snapshot(&self, index: &NodeIndex) -> NavigationSnapshot {
        NavigationSnapshot {
            focus: self.focus.clone(),
            breadcrumbs: self.breadcrumbs(index),
            panel: self.panel.clone(),
        }
    }
}
