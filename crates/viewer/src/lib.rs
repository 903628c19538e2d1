//! Headless viewer for mind-map boards.
//!
//! Loads a board snapshot, replays the layout actions given on the command
//! line and writes the resulting board back out as JSON.

mod args;

use std::{fs, io::Read};

use anyhow::{Context, Result};
use board::{Board, BoardSnapshot, LayoutOutcome, SkipReason};
use mindboard_layout::LayoutConfig;
use tracing::{debug, info, warn};

pub use args::{Action, Args, ParseActionError};

pub fn run(args: &Args) -> Result<()> {
    let input = read_input(&args.input)?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => LayoutConfig::default(),
    };
    debug!(?config, "layout config");

    let snapshot = BoardSnapshot::from_json(&input).with_context(|| format!("failed to parse board `{}`", args.input))?;
    let mut board = Board::from_snapshot_with_config(snapshot, config)?;
    info!(
        nodes = board.nodes().len(),
        edges = board.edges().len(),
        roots = board.claim_order().len(),
        "board loaded"
    );

    let output = render(&mut board, &args.actions)?;
    match &args.output {
        Some(path) => fs::write(path, output).with_context(|| format!("failed to write `{path}`"))?,
        None => println!("{output}"),
    }
    Ok(())
}

/// Replay `actions` on `board` and return the board as pretty JSON.
pub fn render(board: &mut Board, actions: &[Action]) -> Result<String> {
    for action in actions {
        for outcome in replay(board, action) {
            match outcome {
                LayoutOutcome::Skipped(reason) => warn!(?action, ?reason, "action skipped"),
                outcome => info!(?action, ?outcome, "action applied"),
            }
        }
    }
    Ok(board.snapshot().to_json_pretty()?)
}

fn replay(board: &mut Board, action: &Action) -> Vec<LayoutOutcome> {
    match action {
        Action::Apply(node, direction) => vec![board.apply_layout(node, *direction)],
        Action::Clear(node) => vec![board.clear_layout(node)],
        Action::Drag(node, position) => vec![board.on_drag(node, *position)],
        Action::AddChild(parent, label) => match board.add_child(parent, label.as_str()) {
            Some(child) => {
                info!(parent = %parent, child = %child, "child added");
                Vec::new()
            }
            None => vec![LayoutOutcome::Skipped(SkipReason::UnknownNode(parent.clone()))],
        },
        Action::Relayout => board.relayout_all(),
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read board from stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))
}

fn load_config(path: &str) -> Result<LayoutConfig> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read config `{path}`"))?;
    serde_json::from_str(&content).with_context(|| format!("invalid config `{path}`"))
}
