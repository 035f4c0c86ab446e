//! State machine transitions and validation
//!
//! This module classifies clicked nodes, defines valid focus transitions,
//! and provides error types for invalid ones.

use sunburst_types::{NodeId, NodeIndex};
use thiserror::Error;

use crate::focus::FocusState;

/// Error types for invalid state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransitionError {
    #[error("Node '{0}' is not in the index")]
    UnknownNode(NodeId),

    #[error("Cannot ascend: focus is at the root")]
    CannotAscend,

    #[error("Cannot ascend: nothing is focused")]
    NotFocused,
}

impl TransitionError {
    /// Stable code for logs and telemetry.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "LOOKUP_MISS",
            Self::CannotAscend => "CANNOT_ASCEND",
            Self::NotFocused => "NOT_FOCUSED",
        }
    }
}

/// Result type for state transitions
pub type TransitionResult<T> = Result<T, TransitionError>;

/// What kind of node a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Depth 0
    Root,
    /// Between the root and the leaf ring
    Internal { depth: usize },
    /// Outermost ring (depth == leaf depth)
    Leaf,
}

/// Classify a clicked id against the index. `None` means a lookup miss.
///
/// Flattened hierarchies keep every statement at the leaf depth, so the
/// outer ring is exactly the statements.
pub fn classify_click(index: &NodeIndex, id: &NodeId) -> Option<ClickTarget> {
    let depth = index.depth_of(id)?;
    Some(if depth == 0 {
        ClickTarget::Root
    } else if depth == index.leaf_depth() {
        ClickTarget::Leaf
    } else {
        ClickTarget::Internal { depth }
    })
}

/// Validates whether a transition is valid from the current state
pub struct TransitionValidator;

impl TransitionValidator {
    /// Check that the target exists
    pub fn can_focus(index: &NodeIndex, id: &NodeId) -> TransitionResult<()> {
        if index.contains(id) {
            Ok(())
        } else {
            Err(TransitionError::UnknownNode(id.clone()))
        }
    }

    /// Check that the focus has a parent, returning it
    pub fn can_ascend<'i>(
        focus: &FocusState,
        index: &'i NodeIndex,
    ) -> TransitionResult<&'i NodeId> {
        let current = focus.id().ok_or(TransitionError::NotFocused)?;
        Self::can_focus(index, current)?;
        index
            .parent_of(current)
            .ok_or(TransitionError::CannotAscend)
    }
}

/// Describe the current focus state for display
pub fn describe_focus(focus: &FocusState, index: &NodeIndex) -> String {
    match focus {
        FocusState::Unfocused => "No focus".to_string(),
        FocusState::FocusedAt(id) => match index.get(id) {
            Some(entry) => format!("{} '{}' (depth {})", id, entry.label, entry.depth),
            None => format!("{} (not in index)", id),
        },
    }
}
