//! Command-line arguments for the board viewer.

use std::str::FromStr;

use clap::Parser;
use mindboard_layout::{LayoutDirection, NodeId, ParseDirectionError, Position};
use thiserror::Error;

/// Load a board snapshot, replay layout actions on it and print the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the board snapshot (JSON)
    #[arg(help = "Path to the input board, `-` for stdin")]
    pub input: String,

    /// Where to write the resulting board; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a layout configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Action to replay, in order: `apply:<node>:<direction>`, `clear:<node>`,
    /// `drag:<node>:<x>,<y>`, `child:<parent>:<label>` or `relayout`
    #[arg(short, long = "action")]
    pub actions: Vec<Action>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Apply(NodeId, LayoutDirection),
    Clear(NodeId),
    Drag(NodeId, Position),
    AddChild(NodeId, String),
    Relayout,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseActionError {
    #[error("unknown action `{0}`")]
    Unknown(String),
    #[error("action `{0}` is missing an argument")]
    MissingArgument(String),
    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
    #[error("invalid position `{0}`, expected `<x>,<y>`")]
    Position(String),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let mut arg = || {
            parts
                .next()
                .filter(|part| !part.is_empty())
                .ok_or_else(|| ParseActionError::MissingArgument(kind.to_string()))
        };

        match kind {
            "apply" => {
                let node = arg()?;
                let direction = arg()?.parse()?;
                Ok(Action::Apply(node.into(), direction))
            }
            "clear" => Ok(Action::Clear(arg()?.into())),
            "drag" => {
                let node = arg()?;
                let position = parse_position(arg()?)?;
                Ok(Action::Drag(node.into(), position))
            }
            "child" => {
                let parent = arg()?;
                let label = arg()?;
                Ok(Action::AddChild(parent.into(), label.to_string()))
            }
            "relayout" => Ok(Action::Relayout),
            other => Err(ParseActionError::Unknown(other.to_string())),
        }
    }
}

fn parse_position(s: &str) -> Result<Position, ParseActionError> {
    let invalid = || ParseActionError::Position(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Position::new(x, y))
}
