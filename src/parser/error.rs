//! Parse errors for command lines.

use crate::core::UnknownFacing;
use thiserror::Error;

/// Reasons a line is not a recognised command.
///
/// These are ordinary outcomes: the engine discards the line and carries on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command line")]
    Empty,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{command} takes no arguments, got '{arguments}'")]
    UnexpectedArguments {
        command: &'static str,
        arguments: String,
    },

    #[error("PLACE requires arguments X,Y,F")]
    MissingArguments,

    #[error("PLACE expects 3 comma-separated arguments, found {found}")]
    ArgumentCount { found: usize },

    #[error("Invalid coordinate '{value}'")]
    InvalidCoordinate { value: String },

    #[error("Unknown facing '{value}'. Expected NORTH, EAST, SOUTH or WEST")]
    UnknownFacing { value: String },
}

impl From<UnknownFacing> for ParseError {
    fn from(UnknownFacing(value): UnknownFacing) -> Self {
        ParseError::UnknownFacing { value }
    }
}
