//! JSON persistence of a board.

use std::collections::HashSet;

use mindboard_layout::{Edge, EdgeId, LayoutConfig, Node, NodeId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate node id `{0}`")]
    DuplicateNode(NodeId),
    #[error("duplicate edge id `{0}`")]
    DuplicateEdge(EdgeId),
}

/// Serialized form of a board: the canvas node and edge collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl BoardSnapshot {
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Board {
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, BoardError> {
        Self::from_snapshot_with_config(snapshot, LayoutConfig::default())
    }

    /// Rebuild a board from a snapshot. Layout roots found in the snapshot
    /// are claimed and laid out in node order.
    pub fn from_snapshot_with_config(snapshot: BoardSnapshot, config: LayoutConfig) -> Result<Self, BoardError> {
        let mut seen = HashSet::new();
        if let Some(node) = snapshot.nodes.iter().find(|node| !seen.insert(&node.id)) {
            return Err(BoardError::DuplicateNode(node.id.clone()));
        }
        let mut seen = HashSet::new();
        if let Some(edge) = snapshot.edges.iter().find(|edge| !seen.insert(&edge.id)) {
            return Err(BoardError::DuplicateEdge(edge.id.clone()));
        }

        Ok(Self::from_parts(snapshot.nodes, snapshot.edges, config))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}
