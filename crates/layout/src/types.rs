use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Width of every node box on the board.
pub const NODE_W: f64 = 180.0;
/// Height of every node box on the board.
pub const NODE_H: f64 = 50.0;
/// Gap between a parent column and its children (horizontal directions)
/// and between sibling slots laid out side by side (vertical directions).
pub const GAP_X: f64 = 50.0;
/// Gap between sibling slots stacked on top of each other and between a
/// parent row and its children (vertical directions).
pub const GAP_Y: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Top-left corner of a node box in board coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Opaque, board-unique node identity.
    NodeId
);
string_id!(
    /// Opaque edge identity, as addressed by the canvas.
    EdgeId
);

/// How a layout root packs its managed descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    /// Children in a column to the right of the parent.
    HorizontalRight,
    /// Children in a column to the left of the parent.
    HorizontalLeft,
    /// Children in a row below the parent.
    VerticalDown,
    /// Children in a row above the parent.
    VerticalUp,
    /// Children in a single left-aligned column directly below the parent.
    VerticalStack,
}

impl LayoutDirection {
    pub const ALL: [LayoutDirection; 5] = [
        LayoutDirection::HorizontalRight,
        LayoutDirection::HorizontalLeft,
        LayoutDirection::VerticalDown,
        LayoutDirection::VerticalUp,
        LayoutDirection::VerticalStack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutDirection::HorizontalRight => "horizontal-right",
            LayoutDirection::HorizontalLeft => "horizontal-left",
            LayoutDirection::VerticalDown => "vertical-down",
            LayoutDirection::VerticalUp => "vertical-up",
            LayoutDirection::VerticalStack => "vertical-stack",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            LayoutDirection::HorizontalRight | LayoutDirection::HorizontalLeft
        )
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout direction `{0}`")]
pub struct ParseDirectionError(pub String);

impl FromStr for LayoutDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

fn default_draggable() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
    #[serde(default = "default_draggable")]
    pub draggable: bool,
    /// Set on layout roots only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_direction: Option<LayoutDirection>,
    #[serde(default)]
    pub label: String,
    /// Rich-text note markup, opaque to the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Layout root currently positioning this node. Maintained by the board,
    /// never authored by users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governing_root: Option<NodeId>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            draggable: true,
            layout_direction: None,
            label: label.into(),
            note: None,
            governing_root: None,
        }
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = Some(direction);
        self
    }

    pub fn is_layout_root(&self) -> bool {
        self.layout_direction.is_some()
    }

    pub fn state(&self) -> NodeState<'_> {
        match (&self.layout_direction, &self.governing_root) {
            (Some(direction), _) => NodeState::LayoutRoot(*direction),
            (None, Some(root)) => NodeState::Managed(root),
            (None, None) => NodeState::Free,
        }
    }
}

/// Derived role of a node with respect to auto-layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState<'a> {
    /// Positioned by direct manipulation.
    Free,
    /// Owns a layout and positions its reachable descendants.
    LayoutRoot(LayoutDirection),
    /// Positioned by the given layout root.
    Managed(&'a NodeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Bounding box of a measured subtree. Lives for one layout pass only.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionNode {
    pub node_id: NodeId,
    pub width: f64,
    pub height: f64,
    pub children: Vec<DimensionNode>,
}

impl DimensionNode {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Number of nodes in this subtree, root included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(DimensionNode::len).sum::<usize>()
    }

    pub fn node_ids(&self) -> Vec<&NodeId> {
        let mut ids = vec![&self.node_id];
        for child in &self.children {
            ids.extend(child.node_ids());
        }
        ids
    }
}
