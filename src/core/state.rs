//! Robot state and the `State` trait.
//!
//! The robot is either off the table or placed on it; there is no
//! "optional position" to keep in sync with the facing.

use super::facing::Facing;
use super::grid::Position;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values tracked by [`StateHistory`](super::StateHistory).
///
/// All methods are pure.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the variant for display/logging.
    fn name(&self) -> &str;
}

/// State of the robot.
///
/// Whenever the state is `Placed`, the position lies on the grid of the
/// engine that produced it.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Facing, RobotState};
///
/// assert_eq!(RobotState::default(), RobotState::Unplaced);
/// assert_eq!(RobotState::Unplaced.report(), None);
///
/// let state = RobotState::placed(1, 2, Facing::East);
/// assert_eq!(state.report().as_deref(), Some("1,2,EAST"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RobotState {
    /// No robot on the grid yet.
    #[default]
    Unplaced,

    /// Robot on the grid at `position`, pointing towards `facing`.
    Placed { position: Position, facing: Facing },
}

impl RobotState {
    /// Shorthand for a placed state.
    pub fn placed(x: i32, y: i32, facing: Facing) -> Self {
        Self::Placed {
            position: Position::new(x, y),
            facing,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Unplaced => None,
            Self::Placed { position, .. } => Some(*position),
        }
    }

    pub fn facing(&self) -> Option<Facing> {
        match self {
            Self::Unplaced => None,
            Self::Placed { facing, .. } => Some(*facing),
        }
    }

    /// The `x,y,FACING` report line, or `None` when unplaced.
    pub fn report(&self) -> Option<String> {
        match self {
            Self::Unplaced => None,
            Self::Placed { position, facing } => Some(format!("{position},{facing}")),
        }
    }
}

impl State for RobotState {
    fn name(&self) -> &str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed { .. } => "Placed",
        }
    }
}
