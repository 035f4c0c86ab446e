//! Viewport - focus state machine and detail panel for sunburst navigation.
//!
//! The renderer reports clicks; this crate decides what they mean:
//! - root click: refocus on the root, close the panel
//! - internal click: zoom in, or collapse to the parent when already focused
//! - leaf click: open the detail panel, focus unchanged
//! - unknown id: ignored (logged)
//!
//! Breadcrumbs are derived from the focus on demand, never stored.

mod focus;
mod panel;
mod state;
mod transitions;

#[cfg(test)]
mod testing;

pub use focus::{apply_transition, FocusState, FocusTransition};
pub use panel::{DetailPanel, DetailSource};
pub use state::{ClickOutcome, NavigationSnapshot, NavigationState};
pub use transitions::{
    classify_click, describe_focus, ClickTarget, TransitionError, TransitionResult,
    TransitionValidator,
};
