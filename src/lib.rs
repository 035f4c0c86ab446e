//! Challenge Sunburst
//!
//! Flattens the public finance challenge taxonomy into the parallel arrays a
//! sunburst chart renderer draws, and drives click navigation over it.
//!
//! ## Pipeline
//!
//! ```text
//! Taxonomy literal ──► Flattener ──► FlatHierarchy ──► SunburstView ──► ChartRenderer
//!                                      (columns + index)     ▲                │
//!                                                            └── ClickEvent ──┘
//! ```
//!
//! ## Modules
//!
//! - `taxonomy` - literal loading, flattening, colors, label wrapping
//! - `config` - YAML view configuration
//! - `detail` - placeholder rows for the statement detail panel
//! - `events` - click channel between renderer and view
//! - `view` - renderer subscription and navigation glue
//! - `error` - error types
//!
//! Boundary types live in `sunburst-types`; the navigation state machine
//! lives in `viewport`. Both are re-exported here.

pub mod config;
pub mod detail;
pub mod error;
pub mod events;
pub mod taxonomy;
pub mod view;

pub use config::{DetailRowsConfig, SunburstConfig};
pub use detail::PlaceholderRows;
pub use error::{ConfigError, FlattenError, SunburstError};
pub use events::{ClickEmitter, ClickReceiver, EmitterStats, SharedClickEmitter};
pub use taxonomy::{ColorPolicy, ContrastTable, FlattenOptions, Flattener, IdentityPolicy, Taxonomy};
pub use view::{ChartRenderer, RecordingRenderer, SubscriptionId, SunburstView};

pub use sunburst_types::{
    ClickEvent, FlatColumns, FlatHierarchy, FlatNode, HierarchyNode, NodeId, NodeIndex,
    RenderFrame,
};
pub use viewport::{ClickOutcome, DetailPanel, DetailSource, FocusState, NavigationState};
