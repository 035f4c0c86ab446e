//! Focus management and navigation
//!
//! `FocusState` is the node the renderer centres on. `FocusTransition`
//! describes declarative focus changes; `apply_transition` validates them
//! against the index before mutating anything.

use serde::{Deserialize, Serialize};
use sunburst_types::{NodeId, NodeIndex};

use crate::transitions::{TransitionResult, TransitionValidator};

/// Which node is currently the visual centre.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum FocusState {
    /// Startup, before the first focus is set
    #[default]
    Unfocused,
    FocusedAt(NodeId),
}

impl FocusState {
    pub fn id(&self) -> Option<&NodeId> {
        match self {
            FocusState::Unfocused => None,
            FocusState::FocusedAt(id) => Some(id),
        }
    }

    pub fn is_focused_on(&self, id: &NodeId) -> bool {
        self.id() == Some(id)
    }
}

/// Describes a focus transition operation
#[derive(Debug, Clone, PartialEq)]
pub enum FocusTransition {
    /// Focus on the root node
    FocusRoot,

    /// Focus on a specific node
    FocusNode(NodeId),

    /// Focus on the parent of the current focus
    Ascend,
}

/// Apply a focus transition
///
/// Returns a reference to the new state after applying the transition. On
/// error the focus is left untouched.
pub fn apply_transition<'a>(
    focus: &'a mut FocusState,
    index: &NodeIndex,
    transition: FocusTransition,
) -> TransitionResult<&'a FocusState> {
    match transition {
        FocusTransition::FocusRoot => {
            *focus = FocusState::FocusedAt(index.root_id().clone());
        }

        FocusTransition::FocusNode(id) => {
            TransitionValidator::can_focus(index, &id)?;
            *focus = FocusState::FocusedAt(id);
        }

        FocusTransition::Ascend => {
            let parent = TransitionValidator::can_ascend(focus, index)?.clone();
            *focus = FocusState::FocusedAt(parent);
        }
    }
    Ok(&*focus)
}
