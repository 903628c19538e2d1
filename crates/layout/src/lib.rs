//! Auto-layout engine for mind-map boards.
//!
//! A node carrying a [`LayoutDirection`] is a layout root: it owns the nodes
//! reachable from it, up to the next layout root, and places them in two
//! passes. [`measure`] walks the subtree bottom-up into a [`DimensionNode`]
//! tree, and [`assign`] walks that tree top-down into absolute positions.
//! Everything here is a pure function of the node and edge collections; the
//! board crate owns mutation.

pub mod assign;
pub mod config;
pub mod graph;
pub mod layout;
pub mod measure;
pub mod ownership;
pub mod types;
pub mod unlock;

pub use assign::assign;
pub use config::LayoutConfig;
pub use graph::BoardGraph;
pub use layout::{LayoutPass, layout_subtree};
pub use measure::{measure, measure_with_visited};
pub use ownership::{ordered_roots, resolve_ownership};
pub use types::*;
pub use unlock::unlock_reachable;
