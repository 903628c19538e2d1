//! Read-only view over a node/edge snapshot.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::trace;

use crate::types::*;

/// Indexed snapshot of the board's node and edge collections.
///
/// Edges whose endpoints are missing from the node collection are skipped;
/// the canvas may race ahead of the board state and such edges are not fatal.
pub struct BoardGraph<'a> {
    graph: DiGraph<&'a Node, ()>,
    index: HashMap<&'a str, NodeIndex>,
}

impl<'a> BoardGraph<'a> {
    pub fn new(nodes: &'a [Node], edges: &[Edge]) -> Self {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            // First occurrence wins if the collection carries a duplicate id.
            index
                .entry(node.id.as_str())
                .or_insert_with(|| graph.add_node(node));
        }

        for edge in edges {
            match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
                (Some(&source), Some(&target)) => {
                    graph.add_edge(source, target, ());
                }
                _ => trace!(edge = %edge.id, "skipping edge with missing endpoint"),
            }
        }

        Self { graph, index }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.index.get(id).map(|&ix| self.graph[ix])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn direction(&self, id: &str) -> Option<LayoutDirection> {
        self.node(id).and_then(|node| node.layout_direction)
    }

    /// Targets of the outgoing edges of `id`, in edge-collection order.
    /// A target reached by two parallel edges appears twice.
    pub fn children(&self, id: &str) -> Vec<&'a Node> {
        let Some(&ix) = self.index.get(id) else {
            return Vec::new();
        };
        self.child_indices(ix)
            .into_iter()
            .map(|child| self.graph[child])
            .collect()
    }

    /// Nodes declaring a layout direction, in node-collection order.
    pub fn layout_roots(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.graph
            .node_indices()
            .map(|ix| self.graph[ix])
            .filter(|node| node.is_layout_root())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn graph(&self) -> &DiGraph<&'a Node, ()> {
        &self.graph
    }

    fn child_indices(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        // petgraph walks adjacency newest-first.
        let mut children: Vec<NodeIndex> = self
            .graph
            .neighbors_directed(ix, Direction::Outgoing)
            .collect();
        children.reverse();
        children
    }
}
