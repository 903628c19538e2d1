//! Top-down placement of a measured subtree.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::types::*;

/// Write the top-left position of every node in `tree` into `out`.
///
/// `anchor` is the top-left of the root node itself, not of its subtree's
/// bounding box; the root is recorded at `anchor` unchanged.
pub fn assign(
    tree: &DimensionNode,
    anchor: Position,
    direction: LayoutDirection,
    config: &LayoutConfig,
    out: &mut HashMap<NodeId, Position>,
) {
    out.insert(tree.node_id.clone(), anchor);
    if tree.children.is_empty() {
        return;
    }

    let (w, h) = (config.node_width, config.node_height);
    let children = &tree.children;
    let gaps = (children.len() - 1) as f64;

    match direction {
        LayoutDirection::HorizontalRight | LayoutDirection::HorizontalLeft => {
            let x = match direction {
                LayoutDirection::HorizontalRight => anchor.x + w + config.gap_x,
                _ => anchor.x - (w + config.gap_x),
            };
            let block: f64 = children.iter().map(|c| c.height).sum::<f64>() + gaps * config.gap_y;
            let mut slot_top = anchor.y + h / 2.0 - block / 2.0;
            for child in children {
                let slot_center = slot_top + child.height / 2.0;
                let at = Position::new(x, slot_center - h / 2.0);
                assign(child, at, direction, config, out);
                slot_top += child.height + config.gap_y;
            }
        }
        LayoutDirection::VerticalDown | LayoutDirection::VerticalUp => {
            let y = match direction {
                LayoutDirection::VerticalDown => anchor.y + h + config.gap_y,
                _ => anchor.y - (h + config.gap_y),
            };
            let block: f64 = children.iter().map(|c| c.width).sum::<f64>() + gaps * config.gap_x;
            let mut slot_left = anchor.x + w / 2.0 - block / 2.0;
            for child in children {
                let slot_center = slot_left + child.width / 2.0;
                let at = Position::new(slot_center - w / 2.0, y);
                assign(child, at, direction, config, out);
                slot_left += child.width + config.gap_x;
            }
        }
        LayoutDirection::VerticalStack => {
            let half_gap = config.gap_y / 2.0;
            let mut y = anchor.y + h + config.gap_y;
            for child in children {
                assign(child, Position::new(anchor.x, y), direction, config, out);
                y += child.height + half_gap;
            }
        }
    }
}
