//! Board state and interaction on top of `mindboard-layout`.
//!
//! [`Board`] holds the canvas nodes and edges, runs layout passes when a
//! layout is applied, cleared or dragged, and keeps every node's governing
//! root in step with graph edits.

mod board;
mod canvas;
mod controller;
mod session;
mod snapshot;

pub use board::Board;
pub use canvas::{ContextAction, DragEvent, NodeChange};
pub use controller::{LayoutOutcome, SkipReason};
pub use mindboard_layout;
pub use session::{ContextMenu, DOUBLE_CLICK_WINDOW, InteractionSession};
pub use snapshot::{BoardError, BoardSnapshot};
