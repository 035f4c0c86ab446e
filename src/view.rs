//! Sunburst view: renderer subscription plus navigation
//!
//! `SunburstView` owns a fully built `FlatHierarchy`, the navigation state
//! and a `ChartRenderer`. Mounting subscribes the view to the renderer's
//! clicks exactly once; unmounting (or dropping the view) releases the
//! subscription. Clicks are drained from the channel and handled one at a
//! time, re-rendering after any click that changed state.

use std::sync::Arc;

use sunburst_types::{ClickEvent, FlatHierarchy, NodeId, RenderFrame, DEFAULT_DEPTH_WINDOW};
use viewport::{ClickOutcome, DetailSource, NavigationState};

use crate::detail::PlaceholderRows;
use crate::events::{ClickEmitter, ClickReceiver, SharedClickEmitter};

/// Handle for one click subscription on a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// What the view needs from the external chart renderer.
pub trait ChartRenderer {
    /// Start reporting node clicks to `emitter`.
    fn subscribe_clicks(&mut self, emitter: SharedClickEmitter) -> SubscriptionId;

    /// Stop reporting clicks for `id`. Unknown ids are ignored.
    fn unsubscribe_clicks(&mut self, id: SubscriptionId);

    /// Draw (or redraw) the chart.
    fn render(&mut self, frame: &RenderFrame);
}

pub struct SunburstView<R: ChartRenderer, D: DetailSource = PlaceholderRows> {
    hierarchy: FlatHierarchy,
    state: NavigationState,
    renderer: R,
    details: D,
    depth_window: usize,
    emitter: SharedClickEmitter,
    receiver: ClickReceiver,
    subscription: Option<SubscriptionId>,
}

impl<R: ChartRenderer> SunburstView<R, PlaceholderRows> {
    /// View with placeholder detail rows and the default depth window.
    pub fn with_defaults(hierarchy: FlatHierarchy, renderer: R) -> Self {
        Self::new(hierarchy, renderer, PlaceholderRows::default(), DEFAULT_DEPTH_WINDOW)
    }
}

impl<R: ChartRenderer, D: DetailSource> SunburstView<R, D> {
    /// Build an unmounted view focused on the root.
    pub fn new(hierarchy: FlatHierarchy, renderer: R, details: D, depth_window: usize) -> Self {
        let (emitter, receiver) = ClickEmitter::new();
        let state = NavigationState::focused_on_root(hierarchy.index());
        Self {
            hierarchy,
            state,
            renderer,
            details,
            depth_window,
            emitter: Arc::new(emitter),
            receiver,
            subscription: None,
        }
    }

    /// Subscribe to renderer clicks and draw the first frame.
    ///
    /// Returns `false` (and does nothing) if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.subscription.is_some() {
            tracing::debug!("view already mounted");
            return false;
        }
        let id = self.renderer.subscribe_clicks(Arc::clone(&self.emitter));
        self.subscription = Some(id);
        tracing::info!(subscription = id.0, nodes = self.hierarchy.len(), "view mounted");
        self.render();
        true
    }

    /// Release the click subscription. Pending clicks are discarded.
    ///
    /// Returns `false` if the view was not mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(id) = self.subscription.take() else {
            return false;
        };
        self.renderer.unsubscribe_clicks(id);
        let discarded = self.receiver.drain().len();
        let stats = self.emitter.stats();
        tracing::info!(
            subscription = id.0,
            discarded,
            emitted = stats.emitted,
            "view unmounted"
        );
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handle every click the renderer has reported since the last pump.
    pub fn pump(&mut self) -> Vec<ClickOutcome> {
        if !self.is_mounted() {
            return Vec::new();
        }
        self.receiver
            .drain()
            .into_iter()
            .map(|ClickEvent { id }| self.click(&id))
            .collect()
    }

    /// Handle one click directly, bypassing the channel.
    pub fn click(&mut self, id: &NodeId) -> ClickOutcome {
        let outcome = self
            .state
            .handle_click(self.hierarchy.index(), id, &self.details);
        if self.state.dirty && self.is_mounted() {
            self.render();
        }
        outcome
    }

    /// Dismiss the detail panel (the panel's close control).
    pub fn close_panel(&mut self) {
        self.state.close_panel();
        if self.state.dirty && self.is_mounted() {
            self.render();
        }
    }

    /// The frame for the current focus.
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(
            self.hierarchy.columns(),
            self.state.focus_id(),
            self.depth_window,
        )
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        self.state.breadcrumbs(self.hierarchy.index())
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn hierarchy(&self) -> &FlatHierarchy {
        &self.hierarchy
    }

    pub fn emitter(&self) -> SharedClickEmitter {
        Arc::clone(&self.emitter)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn render(&mut self) {
        let frame = self.frame();
        self.renderer.render(&frame);
        self.state.mark_clean();
    }
}

impl<R: ChartRenderer, D: DetailSource> Drop for SunburstView<R, D> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// RECORDING RENDERER
// =============================================================================

/// Headless renderer that keeps every frame and forwards scripted clicks.
///
/// Used by the CLI to replay click sequences and by tests.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Vec<RenderFrame>,
    subscribers: Vec<(SubscriptionId, SharedClickEmitter)>,
    next_subscription: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a user clicking a sector. Returns `false` if nobody listens.
    pub fn click(&self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        for (_, emitter) in &self.subscribers {
            emitter.emit(ClickEvent::new(id.clone()));
        }
        !self.subscribers.is_empty()
    }

    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn subscribe_clicks(&mut self, emitter: SharedClickEmitter) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, emitter));
        id
    }

    fn unsubscribe_clicks(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    fn render(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}
