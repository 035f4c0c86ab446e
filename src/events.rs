//! Click channel between the chart renderer and the view.
//!
//! The renderer holds a `ClickEmitter` and reports node clicks from its own
//! event handling. `emit()` never blocks and the channel is unbounded, so
//! every click reported while the view is alive reaches it. The view drains
//! the matching `ClickReceiver` and handles clicks one at a time.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use sunburst_types::ClickEvent;

/// Renderer-side end of the click channel.
pub struct ClickEmitter {
    sender: Sender<ClickEvent>,

    // Stats (atomic, no locks)
    clicks_emitted: AtomicU64,
    clicks_dropped: AtomicU64,
}

impl ClickEmitter {
    /// Returns the emitter and the receiver the view drains.
    pub fn new() -> (Self, ClickReceiver) {
        let (sender, receiver) = unbounded();

        let emitter = Self {
            sender,
            clicks_emitted: AtomicU64::new(0),
            clicks_dropped: AtomicU64::new(0),
        };

        (emitter, ClickReceiver { receiver })
    }

    /// Report a click. Never blocks.
    ///
    /// A click is only lost when the receiving view no longer exists.
    #[inline]
    pub fn emit(&self, click: ClickEvent) {
        match self.sender.send(click) {
            Ok(()) => {
                self.clicks_emitted.fetch_add(1, Ordering::Relaxed);
            }
            Err(err) => {
                self.clicks_dropped.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(node = %err.0.id, "click dropped: view is gone");
            }
        }
    }

    pub fn stats(&self) -> EmitterStats {
        EmitterStats {
            emitted: self.clicks_emitted.load(Ordering::Relaxed),
            dropped: self.clicks_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Emitter handle given to renderers.
pub type SharedClickEmitter = Arc<ClickEmitter>;

/// Emitter statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitterStats {
    /// Clicks that made it into the channel
    pub emitted: u64,
    /// Clicks reported after the view was gone
    pub dropped: u64,
}

/// View-side end of the click channel.
pub struct ClickReceiver {
    receiver: Receiver<ClickEvent>,
}

impl ClickReceiver {
    /// Everything pending right now, in arrival order.
    pub fn drain(&self) -> Vec<ClickEvent> {
        self.receiver.try_iter().collect()
    }
}
