//! Shared data model.
//!
//! Everything in this module is pure: positions, facings, the robot state,
//! commands, guards and the immutable transition history.

mod command;
mod facing;
mod grid;
mod guard;
mod history;
mod state;

pub use command::Command;
pub use facing::{Facing, UnknownFacing};
pub use grid::{BoundsViolation, Grid, GridError, Position, GRID_MAX};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{RobotState, State};
