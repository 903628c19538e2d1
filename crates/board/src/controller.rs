//! Public layout operations on a [`Board`].
//!
//! Each operation runs to completion within one host event: it works on a
//! copy of the node collection and swaps the finished collection in at the
//! end. Unknown node ids are a no-op, never an error, because the canvas may
//! race ahead of the board state.

use mindboard_layout::{
    BoardGraph, LayoutDirection, Node, NodeId, Position, layout_subtree, ordered_roots,
    resolve_ownership, unlock_reachable,
};
use std::collections::HashSet;
use tracing::debug;

use crate::board::Board;

/// What a board operation did.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutOutcome {
    /// A layout pass ran for `root` and positioned `positioned` nodes,
    /// the root included.
    Applied { root: NodeId, positioned: usize },
    /// The layout of `root` was cleared and `unlocked` nodes became draggable.
    Cleared { root: NodeId, unlocked: usize },
    /// A free node was moved directly.
    Moved(NodeId),
    /// A node was removed from the board.
    Removed(NodeId),
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownNode(NodeId),
    /// The node does not own a layout direction.
    NotLayoutRoot(NodeId),
    /// The node is positioned by a layout and cannot be dragged.
    Locked(NodeId),
    NothingToDo,
}

impl LayoutOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, LayoutOutcome::Skipped(_))
    }
}

impl Board {
    /// Make `root` a layout root with `direction` and lay out its subtree
    /// anchored at the root's current position.
    pub fn apply_layout(&mut self, root: &NodeId, direction: LayoutDirection) -> LayoutOutcome {
        let Some(index) = self.index_of(root.as_str()) else {
            debug!(root = %root, "apply layout: unknown node");
            return LayoutOutcome::Skipped(SkipReason::UnknownNode(root.clone()));
        };

        let mut nodes = self.nodes.clone();
        let node = &mut nodes[index];
        node.layout_direction = Some(direction);
        node.draggable = true;
        node.governing_root = None;
        let anchor = node.position;

        if !self.claim_order.contains(root) {
            self.claim_order.push(root.clone());
        }
        let nodes = self.reconcile_ownership(nodes);
        let (nodes, outcome) = self.run_pass(nodes, root, direction, anchor);
        self.nodes = nodes;
        debug!(root = %root, %direction, ?outcome, "applied layout");
        outcome
    }

    /// Drop the layout of `root` and hand its managed descendants back to
    /// the user. Sub-roots below it keep their own layouts, and nodes owned
    /// by a different root stay locked. Released nodes that another root can
    /// reach are claimed and placed by that root instead.
    pub fn clear_layout(&mut self, root: &NodeId) -> LayoutOutcome {
        let Some(index) = self.index_of(root.as_str()) else {
            debug!(root = %root, "clear layout: unknown node");
            return LayoutOutcome::Skipped(SkipReason::UnknownNode(root.clone()));
        };

        let mut nodes = self.nodes.clone();
        nodes[index].layout_direction = None;
        nodes[index].draggable = true;

        let reachable = {
            let graph = BoardGraph::new(&nodes, &self.edges);
            unlock_reachable(&graph, root)
        };

        let mut released = Vec::new();
        for node in nodes.iter_mut().filter(|node| reachable.contains(&node.id)) {
            if node.governing_root.as_ref().is_some_and(|owner| owner != root) {
                continue;
            }
            if !node.draggable {
                released.push(node.id.clone());
            }
            node.draggable = true;
            node.governing_root = None;
        }

        self.claim_order.retain(|id| id != root);
        self.nodes = nodes;
        // Roots that pick up the released nodes pack them right away.
        self.relayout_all();
        let unlocked = released
            .iter()
            .filter(|id| self.node(id.as_str()).is_some_and(|node| node.draggable))
            .count();
        debug!(root = %root, unlocked, "cleared layout");
        LayoutOutcome::Cleared {
            root: root.clone(),
            unlocked,
        }
    }

    /// React to the canvas dragging `node_id` to `position`.
    ///
    /// A layout root moves there and its managed subtree follows in the same
    /// step. Anything else is not the engine's business.
    pub fn on_drag(&mut self, node_id: &NodeId, position: Position) -> LayoutOutcome {
        let Some(index) = self.index_of(node_id.as_str()) else {
            debug!(node = %node_id, "drag: unknown node");
            return LayoutOutcome::Skipped(SkipReason::UnknownNode(node_id.clone()));
        };
        let Some(direction) = self.nodes[index].layout_direction else {
            return LayoutOutcome::Skipped(SkipReason::NotLayoutRoot(node_id.clone()));
        };

        let mut nodes = self.nodes.clone();
        nodes[index].position = position;
        let (nodes, outcome) = self.run_pass(nodes, node_id, direction, position);
        self.nodes = nodes;
        outcome
    }

    /// Re-resolve ownership and re-run every active layout in claim order.
    pub fn relayout_all(&mut self) -> Vec<LayoutOutcome> {
        let mut nodes = self.reconcile_ownership(self.nodes.clone());
        let mut outcomes = Vec::with_capacity(self.claim_order.len());

        for root in self.claim_order.clone() {
            let Some(node) = nodes.iter().find(|node| node.id == root) else {
                continue;
            };
            let (Some(direction), anchor) = (node.layout_direction, node.position) else {
                continue;
            };
            let (next, outcome) = self.run_pass(nodes, &root, direction, anchor);
            nodes = next;
            outcomes.push(outcome);
        }

        self.nodes = nodes;
        outcomes
    }

    /// One measure + assign pass for `root`. Nodes governed by another root
    /// are fenced off.
    fn run_pass(
        &self,
        nodes: Vec<Node>,
        root: &NodeId,
        direction: LayoutDirection,
        anchor: Position,
    ) -> (Vec<Node>, LayoutOutcome) {
        let fenced: HashSet<NodeId> = nodes
            .iter()
            .filter(|node| node.governing_root.as_ref().is_some_and(|owner| owner != root))
            .map(|node| node.id.clone())
            .collect();

        let pass = {
            let graph = BoardGraph::new(&nodes, &self.edges);
            layout_subtree(&graph, root, direction, anchor, &self.config, fenced)
        };

        match pass {
            Some(pass) => {
                let positioned = pass.len();
                (
                    pass.apply_to(nodes),
                    LayoutOutcome::Applied {
                        root: root.clone(),
                        positioned,
                    },
                )
            }
            None => (nodes, LayoutOutcome::Skipped(SkipReason::UnknownNode(root.clone()))),
        }
    }

    /// Recompute every node's governing root from scratch and prune stale
    /// claim-order entries. Governed nodes are locked; nodes that lost their
    /// governing root become draggable again.
    pub(crate) fn reconcile_ownership(&mut self, nodes: Vec<Node>) -> Vec<Node> {
        let (claim_order, owners) = {
            let graph = BoardGraph::new(&nodes, &self.edges);
            let claim_order = ordered_roots(&graph, &self.claim_order);
            let owners = resolve_ownership(&graph, &claim_order);
            (claim_order, owners)
        };
        self.claim_order = claim_order;

        nodes
            .into_iter()
            .map(|mut node| {
                let owner = owners.get(&node.id).cloned();
                if owner.is_some() {
                    node.draggable = false;
                } else if node.governing_root.is_some() && !node.is_layout_root() {
                    debug!(node = %node.id, "released from layout");
                    node.draggable = true;
                }
                node.governing_root = owner;
                node
            })
            .collect()
    }
}
