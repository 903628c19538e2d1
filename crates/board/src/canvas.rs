//! Events coming from the canvas surface.

use mindboard_layout::{LayoutDirection, NodeId, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::controller::{LayoutOutcome, SkipReason};

/// Change reported by the canvas through its change-application callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    Position {
        id: NodeId,
        position: Position,
        #[serde(default)]
        dragging: bool,
    },
    Remove {
        id: NodeId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    Start { node_id: NodeId },
    Move { node_id: NodeId, position: Position },
    End { node_id: NodeId },
}

impl DragEvent {
    pub fn node_id(&self) -> &NodeId {
        match self {
            DragEvent::Start { node_id } | DragEvent::Move { node_id, .. } | DragEvent::End { node_id } => {
                node_id
            }
        }
    }
}

/// Entry picked from a node's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Apply(LayoutDirection),
    Clear,
}

impl Board {
    /// Apply a batch of canvas changes in order.
    ///
    /// Layout roots are routed through [`Board::on_drag`] so their subtree
    /// follows. Free nodes move directly and locked nodes ignore the change.
    pub fn apply_node_changes(&mut self, changes: impl IntoIterator<Item = NodeChange>) -> Vec<LayoutOutcome> {
        changes
            .into_iter()
            .map(|change| match change {
                NodeChange::Position { id, position, .. } => self.move_node(&id, position),
                NodeChange::Remove { id } => {
                    if self.remove_node(&id) {
                        LayoutOutcome::Removed(id)
                    } else {
                        LayoutOutcome::Skipped(SkipReason::UnknownNode(id))
                    }
                }
            })
            .collect()
    }

    pub fn handle_drag(&mut self, event: &DragEvent) -> LayoutOutcome {
        match event {
            DragEvent::Move { node_id, position } => self.move_node(node_id, *position),
            DragEvent::Start { .. } | DragEvent::End { .. } => LayoutOutcome::Skipped(SkipReason::NothingToDo),
        }
    }

    pub fn handle_context_action(&mut self, node_id: &NodeId, action: ContextAction) -> LayoutOutcome {
        match action {
            ContextAction::Apply(direction) => self.apply_layout(node_id, direction),
            ContextAction::Clear => self.clear_layout(node_id),
        }
    }

    fn move_node(&mut self, id: &NodeId, position: Position) -> LayoutOutcome {
        let Some(index) = self.index_of(id.as_str()) else {
            debug!(node = %id, "move: unknown node");
            return LayoutOutcome::Skipped(SkipReason::UnknownNode(id.clone()));
        };

        let node = &self.nodes[index];
        if node.is_layout_root() {
            self.on_drag(id, position)
        } else if node.draggable {
            self.nodes[index].position = position;
            LayoutOutcome::Moved(id.clone())
        } else {
            LayoutOutcome::Skipped(SkipReason::Locked(id.clone()))
        }
    }
}
