//! Taxonomy loading and flattening
//!
//! - `literal` - single-rooted hierarchy literal (YAML/JSON, bundled data)
//! - `flatten` - pre-order flattener producing ids, values and colors
//! - `colors` - fill policies and the fill -> text contrast table
//! - `wrap` - display label wrapping

pub mod colors;
pub mod flatten;
pub mod literal;
pub mod wrap;

pub use colors::{default_group_palettes, ColorPolicy, ContrastTable, GroupPalette};
pub use flatten::{FlattenOptions, Flattener, IdentityPolicy, DEFAULT_DEPTH_LEVELS};
pub use literal::Taxonomy;
pub use wrap::{wrap_label, DEFAULT_LINE_BREAK, DEFAULT_MAX_LABEL_WIDTH};
