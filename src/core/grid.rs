//! Tabletop coordinates and bounds checking.
//!
//! Bounds checks use Stillwater's `Validation` so that a position outside
//! the grid on both axes reports both violations at once.

use super::facing::Facing;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Largest coordinate on either axis of the default grid.
pub const GRID_MAX: i32 = 4;

/// A cell on the tabletop, origin at the bottom-left corner.
///
/// A bare `Position` carries no bounds guarantee; only a placed
/// [`RobotState`](super::RobotState) is guaranteed to be on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `facing`.
    ///
    /// Returns `None` if the coordinate would overflow.
    pub fn step(self, facing: Facing) -> Option<Self> {
        let (dx, dy) = facing.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// A coordinate that falls outside the grid.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsViolation {
    #[error("x coordinate {value} is outside 0..={max}")]
    X { value: i32, max: i32 },

    #[error("y coordinate {value} is outside 0..={max}")]
    Y { value: i32, max: i32 },
}

/// Grid dimensions that cannot hold a robot.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one cell, got {width}x{height}")]
    Empty { width: u16, height: u16 },
}

#[derive(Deserialize)]
struct GridDimensions {
    width: u16,
    height: u16,
}

impl TryFrom<GridDimensions> for Grid {
    type Error = GridError;

    fn try_from(dimensions: GridDimensions) -> Result<Self, Self::Error> {
        Grid::new(dimensions.width, dimensions.height)
    }
}

/// The rectangular tabletop the robot lives on.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Grid, Position};
///
/// let grid = Grid::default();
/// assert!(grid.contains(Position::new(4, 4)));
/// assert!(!grid.contains(Position::new(5, 0)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "GridDimensions")]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: (GRID_MAX + 1) as u16,
            height: (GRID_MAX + 1) as u16,
        }
    }
}

impl Grid {
    /// Create a grid with `width` columns and `height` rows.
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Largest valid x coordinate.
    pub fn max_x(&self) -> i32 {
        i32::from(self.width) - 1
    }

    /// Largest valid y coordinate.
    pub fn max_y(&self) -> i32 {
        i32::from(self.height) - 1
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x()).contains(&position.x) && (0..=self.max_y()).contains(&position.y)
    }

    /// Check both axes, accumulating every violation.
    pub fn validate(
        &self,
        position: Position,
    ) -> Validation<Position, NonEmptyVec<BoundsViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BoundsViolation>>> = Vec::new();

        let max_x = self.max_x();
        checks.push(if (0..=max_x).contains(&position.x) {
            Validation::success(())
        } else {
            Validation::fail(BoundsViolation::X {
                value: position.x,
                max: max_x,
            })
        });

        let max_y = self.max_y();
        checks.push(if (0..=max_y).contains(&position.y) {
            Validation::success(())
        } else {
            Validation::fail(BoundsViolation::Y {
                value: position.y,
                max: max_y,
            })
        });

        Validation::all_vec(checks).map(move |_| position)
    }
}
