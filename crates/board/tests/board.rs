use board::{Board, BoardSnapshot, LayoutOutcome, NodeChange, SkipReason};
use mindboard_layout::{Edge, LayoutDirection, Node, NodeId, Position};
use std::collections::HashMap;

fn board(nodes: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Board {
    let snapshot = BoardSnapshot {
        nodes: nodes
            .iter()
            .map(|(id, x, y)| Node::new(*id, id.to_uppercase(), Position::new(*x, *y)))
            .collect(),
        edges: edges
            .iter()
            .map(|(s, t)| Edge::new(format!("{s}->{t}"), *s, *t))
            .collect(),
    };
    Board::from_snapshot(snapshot).unwrap()
}

fn node<'a>(board: &'a Board, id: &str) -> &'a Node {
    board.node(id).unwrap()
}

fn positions(board: &Board) -> HashMap<NodeId, Position> {
    board.nodes().iter().map(|n| (n.id.clone(), n.position)).collect()
}

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

#[test]
fn test_applying_twice_is_idempotent() {
    let mut board = board(
        &[("a", 0.0, 0.0), ("b", 0.0, 0.0), ("c", 0.0, 0.0), ("d", 0.0, 0.0)],
        &[("a", "b"), ("a", "c"), ("c", "d")],
    );
    for direction in LayoutDirection::ALL {
        board.apply_layout(&id("a"), direction);
        let first = positions(&board);
        board.apply_layout(&id("a"), direction);
        assert_eq!(positions(&board), first, "{direction}");
    }
}

#[test]
fn test_lock_invariant() {
    let mut board = board(
        &[("r", 10.0, 10.0), ("b", 0.0, 0.0), ("c", 0.0, 0.0), ("free", 0.0, 0.0)],
        &[("r", "b"), ("b", "c")],
    );
    board.apply_layout(&id("r"), LayoutDirection::HorizontalLeft);

    assert!(node(&board, "r").draggable);
    assert!(!node(&board, "b").draggable);
    assert!(!node(&board, "c").draggable);
    assert!(node(&board, "free").draggable);
    assert_eq!(node(&board, "free").governing_root, None);
}

#[test]
fn test_clear_restores_dragging() {
    let mut board = board(&[("a", 0.0, 0.0), ("b", 0.0, 0.0), ("c", 0.0, 0.0)], &[("a", "b"), ("a", "c")]);
    board.apply_layout(&id("a"), LayoutDirection::VerticalDown);
    assert!(!node(&board, "b").draggable && !node(&board, "c").draggable);
    let laid_out = positions(&board);

    let outcome = board.clear_layout(&id("a"));
    assert_eq!(
        outcome,
        LayoutOutcome::Cleared {
            root: id("a"),
            unlocked: 2
        }
    );
    assert!(node(&board, "b").draggable && node(&board, "c").draggable);
    assert_eq!(node(&board, "a").layout_direction, None);
    // clearing never moves anything
    assert_eq!(positions(&board), laid_out);
    assert!(board.claim_order().is_empty());
}

#[test]
fn test_drag_re_anchors_subtree() {
    let mut board = board(
        &[("r", 0.0, 0.0), ("b", 0.0, 0.0), ("c", 0.0, 0.0), ("c1", 0.0, 0.0)],
        &[("r", "b"), ("r", "c"), ("c", "c1")],
    );
    for direction in LayoutDirection::ALL {
        board.on_drag(&id("r"), Position::new(0.0, 0.0));
        board.apply_layout(&id("r"), direction);
        let before = positions(&board);

        board.on_drag(&id("r"), Position::new(100.0, 50.0));
        board.relayout_all();
        let after = positions(&board);

        for (node_id, position) in &before {
            assert_eq!(after[node_id], position.offset(100.0, 50.0), "{direction}: {node_id}");
        }
    }
}

#[test]
fn test_sub_root_keeps_its_own_position() {
    let mut board = board(
        &[("a", 0.0, 0.0), ("b", 0.0, 0.0), ("sub", -300.0, 400.0), ("leaf", 0.0, 0.0)],
        &[("a", "b"), ("a", "sub"), ("sub", "leaf")],
    );
    board.apply_layout(&id("sub"), LayoutDirection::VerticalUp);
    board.apply_layout(&id("a"), LayoutDirection::HorizontalRight);

    let sub = node(&board, "sub");
    assert_eq!(sub.position, Position::new(-300.0, 400.0));
    assert!(sub.draggable);
    assert_eq!(sub.governing_root, None);
    assert_eq!(node(&board, "leaf").position, Position::new(-300.0, 330.0));
    assert_eq!(node(&board, "leaf").governing_root, Some(id("sub")));
    // b is alone in a's column, so it sits level with a
    assert_eq!(node(&board, "b").position, Position::new(230.0, 0.0));
}

#[test]
fn test_add_child_is_packed_into_the_layout() {
    let mut board = Board::new();
    let root = board.add_node("Root", Position::default());
    board.apply_layout(&root, LayoutDirection::VerticalDown);

    let first = board.add_child(&root, "One").unwrap();
    assert_eq!(node(&board, first.as_str()).position, Position::new(0.0, 70.0));
    assert!(!node(&board, first.as_str()).draggable);

    let second = board.add_child(&root, "Two").unwrap();
    assert_eq!(node(&board, first.as_str()).position, Position::new(-115.0, 70.0));
    assert_eq!(node(&board, second.as_str()).position, Position::new(115.0, 70.0));

    let grandchild = board.add_child(&second, "Deep").unwrap();
    assert_eq!(node(&board, grandchild.as_str()).governing_root, Some(root));
}

#[test]
fn test_removing_an_edge_frees_the_detached_subtree() {
    let mut board = board(&[("a", 0.0, 0.0), ("b", 0.0, 0.0), ("c", 0.0, 0.0)], &[("a", "b"), ("b", "c")]);
    board.apply_layout(&id("a"), LayoutDirection::VerticalStack);
    let placed = positions(&board);

    assert!(board.remove_edge(&"a->b".into()));
    for free in ["b", "c"] {
        assert!(node(&board, free).draggable);
        assert_eq!(node(&board, free).governing_root, None);
        assert_eq!(node(&board, free).position, placed[free]);
    }
    assert!(!board.remove_edge(&"a->b".into()));
}

#[test]
fn test_first_claimed_root_keeps_shared_nodes() {
    let mut board = board(
        &[("z", 0.0, 0.0), ("a", 500.0, 500.0), ("shared", 0.0, 0.0)],
        &[("z", "shared"), ("a", "shared")],
    );
    board.apply_layout(&id("z"), LayoutDirection::VerticalDown);
    board.apply_layout(&id("a"), LayoutDirection::HorizontalRight);

    assert_eq!(node(&board, "shared").position, Position::new(0.0, 70.0));
    assert_eq!(node(&board, "shared").governing_root, Some(id("z")));
    assert_eq!(board.claim_order().to_vec(), vec![id("z"), id("a")]);

    // once z lets go, a picks the node up and places it in the same step
    let outcome = board.clear_layout(&id("z"));
    assert_eq!(
        outcome,
        LayoutOutcome::Cleared {
            root: id("z"),
            unlocked: 0
        }
    );
    let shared = node(&board, "shared");
    assert_eq!(shared.governing_root, Some(id("a")));
    assert_eq!(shared.position, Position::new(730.0, 500.0));
    assert!(board.nodes().iter().filter(|n| n.governing_root.is_some()).all(|n| !n.draggable));

    let outcomes = board.apply_node_changes([NodeChange::Position {
        id: id("shared"),
        position: Position::new(-999.0, -999.0),
        dragging: true,
    }]);
    assert_eq!(outcomes, vec![LayoutOutcome::Skipped(SkipReason::Locked(id("shared")))]);
    assert_eq!(node(&board, "shared").position, Position::new(730.0, 500.0));
}

#[test]
fn test_clearing_a_nested_root_hands_its_nodes_to_the_outer_root() {
    let mut board = board(
        &[("a", 0.0, 0.0), ("sub", -300.0, 400.0), ("leaf", 0.0, 0.0)],
        &[("a", "sub"), ("sub", "leaf")],
    );
    board.apply_layout(&id("sub"), LayoutDirection::VerticalUp);
    board.apply_layout(&id("a"), LayoutDirection::VerticalDown);

    board.clear_layout(&id("sub"));
    for managed in ["sub", "leaf"] {
        assert_eq!(node(&board, managed).governing_root, Some(id("a")));
        assert!(!node(&board, managed).draggable);
    }
    assert_eq!(node(&board, "sub").position, Position::new(0.0, 70.0));
    assert_eq!(node(&board, "leaf").position, Position::new(0.0, 140.0));
}

#[test]
fn test_snapshot_survives_a_json_round_trip() {
    let mut board = Board::new();
    let root = board.add_node("Root", Position::new(20.0, 20.0));
    let child = board.add_child(&root, "Child").unwrap();
    board.set_note(&child, Some("<b>rich</b>".to_string()));
    board.apply_layout(&root, LayoutDirection::HorizontalRight);

    let json = board.snapshot().to_json_pretty().unwrap();
    let reloaded = Board::from_snapshot(BoardSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(reloaded.nodes(), board.nodes());
    assert_eq!(reloaded.edges(), board.edges());
    assert_eq!(reloaded.claim_order(), board.claim_order());
}
