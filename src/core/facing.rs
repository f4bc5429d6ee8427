//! Cardinal directions and rotation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A token that names no facing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown facing '{0}'")]
pub struct UnknownFacing(pub String);

/// The direction the robot is pointing.
///
/// Rotation moves one step along the clockwise cycle
/// `NORTH -> EAST -> SOUTH -> WEST -> NORTH`.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Facing;
///
/// assert_eq!(Facing::North.rotate_right(), Facing::East);
/// assert_eq!(Facing::North.rotate_left(), Facing::West);
/// assert_eq!("south".parse::<Facing>().unwrap(), Facing::South);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Turn 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Turn 90 degrees counter-clockwise.
    pub fn rotate_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Unit movement vector `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Uppercase name used in reports and commands.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facing {
    type Err = UnknownFacing;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|facing| facing.name().eq_ignore_ascii_case(token))
            .ok_or_else(|| UnknownFacing(token.to_string()))
    }
}
