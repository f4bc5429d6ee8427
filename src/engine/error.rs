//! Engine errors.

use crate::core::{BoundsViolation, GridError, Position};
use thiserror::Error;

/// Reasons a well-formed command has no effect.
///
/// The engine drops these silently; they never leave the command that
/// produced them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Robot is not placed, ignoring {command}")]
    NotPlaced { command: &'static str },

    #[error("Position {position} is off the grid")]
    OutOfBounds {
        position: Position,
        violations: Vec<BoundsViolation>,
    },

    #[error("Guard blocked the robot from entering {position}")]
    GuardBlocked { position: Position },
}

/// Errors that can occur when building an engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: u16, height: u16 },

    #[error("Initial position {position} is off the grid")]
    InitialStateOutOfBounds { position: Position },

    #[error("Initial position {position} is blocked by a guard")]
    InitialStateBlocked { position: Position },
}

impl From<GridError> for BuildError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::Empty { width, height } => BuildError::EmptyGrid { width, height },
        }
    }
}
