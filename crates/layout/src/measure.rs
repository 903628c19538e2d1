//! Bottom-up measurement of a layout subtree.

use std::collections::HashSet;
use tracing::trace;

use crate::config::LayoutConfig;
use crate::graph::BoardGraph;
use crate::types::*;

/// Measure the subtree hanging off `root` for `direction`.
///
/// Children that declare their own layout direction are layout boundaries and
/// are left out of the tree. Returns `None` if `root` is not on the board.
pub fn measure(
    graph: &BoardGraph<'_>,
    root: &NodeId,
    direction: LayoutDirection,
    config: &LayoutConfig,
) -> Option<DimensionNode> {
    let mut visited = HashSet::new();
    measure_with_visited(graph, root, direction, config, &mut visited)
}

/// Like [`measure`], sharing `visited` with the caller.
///
/// Ids already in `visited` are treated as entered: they measure to `None` and
/// contribute nothing to their parent. This both guards against back-edges and
/// lets a caller fence off nodes that belong to another layout.
pub fn measure_with_visited(
    graph: &BoardGraph<'_>,
    root: &NodeId,
    direction: LayoutDirection,
    config: &LayoutConfig,
    visited: &mut HashSet<NodeId>,
) -> Option<DimensionNode> {
    if !graph.contains(root.as_str()) {
        return None;
    }
    if !visited.insert(root.clone()) {
        trace!(node = %root, "already visited, truncating");
        return None;
    }

    let mut children = Vec::new();
    for child in graph.children(root.as_str()) {
        if child.is_layout_root() {
            trace!(parent = %root, child = %child.id, "layout boundary");
            continue;
        }
        if let Some(measured) = measure_with_visited(graph, &child.id, direction, config, visited) {
            children.push(measured);
        }
    }

    let size = config.subtree_size(direction, &children);
    trace!(node = %root, width = size.width, height = size.height, "measured");

    Some(DimensionNode {
        node_id: root.clone(),
        width: size.width,
        height: size.height,
        children,
    })
}
