use mindboard_layout::{Edge, EdgeId, LayoutConfig, Node, NodeId, Position};
use tracing::debug;

/// Editable board state: the node and edge collections the canvas renders,
/// plus the seniority of layout roots used to settle shared ownership.
///
/// Layout passes never patch nodes in place; they build a replacement node
/// collection and swap it in whole.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    /// Layout roots in the order their layouts were first applied.
    pub(crate) claim_order: Vec<NodeId>,
    pub(crate) config: LayoutConfig,
    next_id: u64,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Board over existing collections. Ownership is resolved and every
    /// layout root found is laid out, in node order.
    pub(crate) fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, config: LayoutConfig) -> Self {
        let mut board = Self {
            nodes,
            edges,
            claim_order: Vec::new(),
            config,
            next_id: 0,
        };
        board.relayout_all();
        board
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn claim_order(&self) -> &[NodeId] {
        &self.claim_order
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id.as_str() == id)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id.as_str() == id)
    }

    pub fn add_node(&mut self, label: impl Into<String>, position: Position) -> NodeId {
        let id = self.fresh_node_id();
        self.nodes.push(Node::new(id.clone(), label, position));
        debug!(node = %id, "added node");
        id
    }

    /// Tab-to-add-child: a new node one column to the right of `parent`,
    /// connected to it. If the parent takes part in a layout, the layout is
    /// re-run so the child is packed right away.
    pub fn add_child(&mut self, parent: &NodeId, label: impl Into<String>) -> Option<NodeId> {
        let Some(parent_node) = self.node(parent.as_str()) else {
            debug!(parent = %parent, "add child: unknown parent");
            return None;
        };
        let position = parent_node
            .position
            .offset(self.config.node_width + self.config.gap_x, 0.0);
        let in_layout = parent_node.is_layout_root() || parent_node.governing_root.is_some();

        let id = self.fresh_node_id();
        self.nodes.push(Node::new(id.clone(), label, position));
        let edge_id = self.fresh_edge_id();
        self.edges.push(Edge::new(edge_id, parent.clone(), id.clone()));
        debug!(parent = %parent, child = %id, "added child");

        if in_layout {
            self.relayout_all();
        }
        Some(id)
    }

    /// Connect `source` to `target`. Self-loops and unknown endpoints are
    /// refused; connecting an already connected pair returns the existing edge.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Option<EdgeId> {
        if source == target || self.index_of(source.as_str()).is_none() || self.index_of(target.as_str()).is_none() {
            debug!(source = %source, target = %target, "connect refused");
            return None;
        }
        if let Some(existing) = self
            .edges
            .iter()
            .find(|edge| &edge.source == source && &edge.target == target)
        {
            return Some(existing.id.clone());
        }

        let id = self.fresh_edge_id();
        self.edges.push(Edge::new(id.clone(), source.clone(), target.clone()));
        debug!(edge = %id, source = %source, target = %target, "connected");
        self.relayout_all();
        Some(id)
    }

    /// Remove a node together with its incident edges. Nodes that lose
    /// their governing layout become free again.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(index) = self.index_of(id.as_str()) else {
            return false;
        };
        self.nodes.remove(index);
        self.edges.retain(|edge| &edge.source != id && &edge.target != id);
        self.claim_order.retain(|root| root != id);
        debug!(node = %id, "removed node");
        self.relayout_all();
        true
    }

    pub fn remove_edge(&mut self, id: &EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| &edge.id != id);
        if self.edges.len() == before {
            return false;
        }
        debug!(edge = %id, "removed edge");
        self.relayout_all();
        true
    }

    pub fn set_label(&mut self, id: &NodeId, label: impl Into<String>) -> bool {
        match self.nodes.iter_mut().find(|node| &node.id == id) {
            Some(node) => {
                node.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Replace the rich-text note of a node; `None` deletes it.
    pub fn set_note(&mut self, id: &NodeId, note: Option<String>) -> bool {
        match self.nodes.iter_mut().find(|node| &node.id == id) {
            Some(node) => {
                node.note = note;
                true
            }
            None => false,
        }
    }

    fn fresh_node_id(&mut self) -> NodeId {
        loop {
            self.next_id += 1;
            let candidate = format!("node-{}", self.next_id);
            if self.index_of(&candidate).is_none() {
                return NodeId::new(candidate);
            }
        }
    }

    fn fresh_edge_id(&mut self) -> EdgeId {
        loop {
            self.next_id += 1;
            let candidate = format!("edge-{}", self.next_id);
            if !self.edges.iter().any(|edge| edge.id.as_str() == candidate) {
                return EdgeId::new(candidate);
            }
        }
    }
}
