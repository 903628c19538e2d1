use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::assign::assign;
use crate::config::LayoutConfig;
use crate::graph::BoardGraph;
use crate::measure::measure_with_visited;
use crate::types::*;

/// Result of one measure + assign pass for a single layout root.
#[derive(Debug, Clone)]
pub struct LayoutPass {
    pub root: NodeId,
    pub direction: LayoutDirection,
    pub tree: DimensionNode,
    pub positions: HashMap<NodeId, Position>,
}

/// Measure and place the subtree of `root`, anchored at `anchor`.
///
/// `fenced` lists nodes the pass must neither measure nor move, typically
/// nodes governed by another layout root. Returns `None` when `root` is not
/// on the board.
pub fn layout_subtree(
    graph: &BoardGraph<'_>,
    root: &NodeId,
    direction: LayoutDirection,
    anchor: Position,
    config: &LayoutConfig,
    fenced: HashSet<NodeId>,
) -> Option<LayoutPass> {
    let mut visited = fenced;
    visited.remove(root);
    let tree = measure_with_visited(graph, root, direction, config, &mut visited)?;

    let mut positions = HashMap::with_capacity(tree.len());
    assign(&tree, anchor, direction, config, &mut positions);
    debug!(
        root = %root,
        %direction,
        nodes = positions.len(),
        width = tree.width,
        height = tree.height,
        "layout pass"
    );

    Some(LayoutPass {
        root: root.clone(),
        direction,
        tree,
        positions,
    })
}

impl LayoutPass {
    /// Nodes positioned by this pass other than the root.
    pub fn managed(&self) -> impl Iterator<Item = &NodeId> {
        self.positions.keys().filter(|id| **id != self.root)
    }

    /// Number of positioned nodes, the root included. Never zero.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Produce the replacement node collection.
    ///
    /// Positioned nodes take their new position; every one of them except the
    /// root becomes non-draggable and governed by the root. The root keeps its
    /// draggable flag. Nodes outside the pass are returned untouched.
    pub fn apply_to(&self, nodes: Vec<Node>) -> Vec<Node> {
        nodes
            .into_iter()
            .map(|mut node| {
                if let Some(position) = self.positions.get(&node.id) {
                    node.position = *position;
                    if node.id != self.root {
                        node.draggable = false;
                        node.governing_root = Some(self.root.clone());
                    }
                }
                node
            })
            .collect()
    }
}
