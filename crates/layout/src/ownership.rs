//! Which layout root governs which node.
//!
//! A node reachable from two layout roots would otherwise be positioned by
//! whichever pass ran last. Ownership is instead resolved up front: roots are
//! processed in claim order (the order their layouts were first applied) and
//! the first root to reach a node keeps it. Later roots treat claimed nodes
//! exactly like already-visited ones.

use petgraph::visit::{Dfs, NodeFiltered};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::graph::BoardGraph;
use crate::types::*;

/// Map every managed node to the root that governs it.
///
/// `claim_order` lists layout roots by seniority. Roots present on the board
/// but missing from `claim_order` follow in node-collection order; ids in
/// `claim_order` that are gone or no longer declare a direction are ignored.
pub fn resolve_ownership(graph: &BoardGraph<'_>, claim_order: &[NodeId]) -> HashMap<NodeId, NodeId> {
    let mut owners: HashMap<NodeId, NodeId> = HashMap::new();
    let inner = graph.graph();

    for root in ordered_roots(graph, claim_order) {
        let Some(start) = graph.index_of(root.as_str()) else {
            continue;
        };

        let claimed = {
            let filtered = NodeFiltered::from_fn(inner, |ix| {
                ix == start
                    || (!inner[ix].is_layout_root() && !owners.contains_key(inner[ix].id.as_str()))
            });
            let mut dfs = Dfs::new(&filtered, start);
            let mut claimed = Vec::new();
            while let Some(ix) = dfs.next(&filtered) {
                if ix != start {
                    claimed.push(inner[ix].id.clone());
                }
            }
            claimed
        };

        debug!(root = %root, claimed = claimed.len(), "resolved layout ownership");
        for id in claimed {
            owners.insert(id, root.clone());
        }
    }

    owners
}

/// Layout roots in claim order, each listed once.
pub fn ordered_roots(graph: &BoardGraph<'_>, claim_order: &[NodeId]) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    claim_order
        .iter()
        .filter(|id| graph.direction(id.as_str()).is_some())
        .cloned()
        .chain(graph.layout_roots().map(|node| node.id.clone()))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
