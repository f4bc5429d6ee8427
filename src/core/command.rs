//! Typed robot commands.

use super::facing::Facing;
use super::grid::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structurally valid command.
///
/// Whether it has any effect is decided by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Put the robot on the table at `position`, pointing towards `facing`.
    Place { position: Position, facing: Facing },
    /// Advance one cell in the current facing.
    Move,
    /// Rotate 90 degrees counter-clockwise.
    Left,
    /// Rotate 90 degrees clockwise.
    Right,
    /// Emit the current position and facing.
    Report,
}

impl Command {
    pub fn place(x: i32, y: i32, facing: Facing) -> Self {
        Self::Place {
            position: Position::new(x, y),
            facing,
        }
    }

    /// The command keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Place { .. } => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { position, facing } => write!(f, "PLACE {position},{facing}"),
            other => f.write_str(other.keyword()),
        }
    }
}
