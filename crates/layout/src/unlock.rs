use petgraph::visit::{Dfs, NodeFiltered};
use std::collections::HashSet;

use crate::graph::BoardGraph;
use crate::types::*;

/// Descendants of `root` that a cleared layout should hand back to the user.
///
/// Follows outgoing edges and stops at nodes declaring their own layout
/// direction: those keep their own managed subtree. `root` itself is exempt
/// from the boundary check and is not part of the result.
pub fn unlock_reachable(graph: &BoardGraph<'_>, root: &NodeId) -> HashSet<NodeId> {
    let Some(start) = graph.index_of(root.as_str()) else {
        return HashSet::new();
    };

    let inner = graph.graph();
    let filtered = NodeFiltered::from_fn(inner, |ix| ix == start || !inner[ix].is_layout_root());
    let mut dfs = Dfs::new(&filtered, start);
    let mut reached = HashSet::new();
    while let Some(ix) = dfs.next(&filtered) {
        if ix != start {
            reached.insert(inner[ix].id.clone());
        }
    }
    reached
}
