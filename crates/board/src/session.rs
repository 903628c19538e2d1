//! Per-canvas interaction state that lives outside the board data.

use std::time::{Duration, Instant};

use mindboard_layout::{NodeId, Position};
use tracing::trace;

use crate::board::Board;
use crate::canvas::{ContextAction, DragEvent};
use crate::controller::LayoutOutcome;

/// Two clicks on the same node within this window count as a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

/// Context menu opened on a node, anchored at the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    pub node_id: NodeId,
    pub anchor: Position,
}

#[derive(Debug, Default)]
pub struct InteractionSession {
    context_menu: Option<ContextMenu>,
    dragging: Option<NodeId>,
    last_click: Option<(NodeId, Instant)>,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the menu for `node_id`, replacing any menu already open.
    pub fn open_context_menu(&mut self, node_id: NodeId, anchor: Position) {
        trace!(node = %node_id, "open context menu");
        self.context_menu = Some(ContextMenu { node_id, anchor });
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn take_context_menu(&mut self) -> Option<ContextMenu> {
        self.context_menu.take()
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    /// Track which node is being dragged. Any drag closes the context menu.
    pub fn observe_drag(&mut self, event: &DragEvent) {
        self.close_context_menu();
        match event {
            DragEvent::Start { node_id } | DragEvent::Move { node_id, .. } => {
                self.dragging = Some(node_id.clone());
            }
            DragEvent::End { .. } => self.dragging = None,
        }
    }

    pub fn dragging(&self) -> Option<&NodeId> {
        self.dragging.as_ref()
    }

    /// Record a click on `node_id` at `at`. Returns `true` when it completes
    /// a double click; the pair is then consumed.
    pub fn register_click(&mut self, node_id: &NodeId, at: Instant) -> bool {
        let double = matches!(
            &self.last_click,
            Some((last, when)) if last == node_id && at.saturating_duration_since(*when) <= DOUBLE_CLICK_WINDOW
        );
        self.last_click = if double { None } else { Some((node_id.clone(), at)) };
        double
    }

    /// Run `action` against the node the open menu belongs to and close the
    /// menu. Returns `None` when no menu is open.
    pub fn choose(&mut self, board: &mut Board, action: ContextAction) -> Option<LayoutOutcome> {
        let menu = self.context_menu.take()?;
        Some(board.handle_context_action(&menu.node_id, action))
    }
}
