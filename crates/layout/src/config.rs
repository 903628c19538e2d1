use serde::{Deserialize, Serialize};

use crate::types::*;

/// Box and gap metrics shared by the measurer and the assigner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub gap_x: f64,
    pub gap_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_W,
            node_height: NODE_H,
            gap_x: GAP_X,
            gap_y: GAP_Y,
        }
    }
}

impl LayoutConfig {
    pub fn node_size(&self) -> Size {
        Size {
            width: self.node_width,
            height: self.node_height,
        }
    }

    /// Bounding box of a node whose measured children are `children`,
    /// packed according to `direction`.
    pub fn subtree_size(&self, direction: LayoutDirection, children: &[DimensionNode]) -> Size {
        if children.is_empty() {
            return self.node_size();
        }

        let gaps = (children.len() - 1) as f64;
        let sum_w: f64 = children.iter().map(|c| c.width).sum();
        let sum_h: f64 = children.iter().map(|c| c.height).sum();
        let max_w = children.iter().map(|c| c.width).fold(0.0, f64::max);
        let max_h = children.iter().map(|c| c.height).fold(0.0, f64::max);

        match direction {
            LayoutDirection::HorizontalRight | LayoutDirection::HorizontalLeft => Size {
                width: self.node_width + self.gap_x + max_w,
                height: self.node_height.max(sum_h + gaps * self.gap_y),
            },
            LayoutDirection::VerticalDown | LayoutDirection::VerticalUp => Size {
                width: self.node_width.max(sum_w + gaps * self.gap_x),
                height: self.node_height + self.gap_y + max_h,
            },
            LayoutDirection::VerticalStack => {
                let half_gap = self.gap_y / 2.0;
                Size {
                    width: self.node_width,
                    height: self.node_height + half_gap + sum_h + gaps * half_gap,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, width: f64, height: f64) -> DimensionNode {
        DimensionNode {
            node_id: NodeId::from(id),
            width,
            height,
            children: vec![],
        }
    }

    #[test]
    fn test_leaf_size_is_node_box_for_every_direction() {
        let config = LayoutConfig::default();
        for direction in LayoutDirection::ALL {
            let size = config.subtree_size(direction, &[]);
            assert_eq!(size.width, NODE_W);
            assert_eq!(size.height, NODE_H);
        }
    }

    #[test]
    fn test_horizontal_size() {
        let config = LayoutConfig::default();
        let children = [leaf("a", 180.0, 50.0), leaf("b", 410.0, 120.0)];
        let size = config.subtree_size(LayoutDirection::HorizontalLeft, &children);
        assert_eq!(size.width, 180.0 + 50.0 + 410.0);
        assert_eq!(size.height, 50.0 + 120.0 + 20.0);
    }

    #[test]
    fn test_horizontal_height_never_below_node() {
        let config = LayoutConfig {
            node_height: 80.0,
            ..Default::default()
        };
        let size = config.subtree_size(LayoutDirection::HorizontalRight, &[leaf("a", 180.0, 50.0)]);
        assert_eq!(size.height, 80.0);
    }

    #[test]
    fn test_vertical_size() {
        let config = LayoutConfig::default();
        let children = [leaf("a", 180.0, 50.0), leaf("b", 180.0, 140.0), leaf("c", 180.0, 50.0)];
        let size = config.subtree_size(LayoutDirection::VerticalUp, &children);
        assert_eq!(size.width, 3.0 * 180.0 + 2.0 * 50.0);
        assert_eq!(size.height, 50.0 + 20.0 + 140.0);
    }

    #[test]
    fn test_stack_size_uses_half_gap() {
        let config = LayoutConfig::default();
        let children = [leaf("a", 180.0, 50.0), leaf("b", 180.0, 110.0)];
        let size = config.subtree_size(LayoutDirection::VerticalStack, &children);
        assert_eq!(size.width, NODE_W);
        assert_eq!(size.height, 50.0 + 10.0 + 160.0 + 10.0);
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "gap_x": 80.0 }"#).unwrap();
        assert_eq!(config.gap_x, 80.0);
        assert_eq!(config.node_width, NODE_W);
        assert_eq!(config.gap_y, GAP_Y);
    }
}
