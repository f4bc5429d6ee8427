//! Builder for configuring an engine.

use super::error::{BuildError, TransitionError};
use super::machine::Engine;
use super::transition::Tabletop;
use crate::core::{Grid, Guard, Position, RobotState};

/// Number of transitions an engine keeps unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Fluent builder for [`Engine`].
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Facing, Position, RobotState};
/// use toy_robot::engine::Engine;
///
/// let mut engine = Engine::builder()
///     .grid(8, 8)
///     .initial(RobotState::placed(6, 6, Facing::North))
///     .guard(|p: &Position| *p != Position::new(6, 7))
///     .build()
///     .unwrap();
///
/// engine.execute("MOVE");
/// assert_eq!(engine.execute("REPORT").as_deref(), Some("6,6,NORTH"));
/// ```
pub struct EngineBuilder {
    width: u16,
    height: u16,
    initial: RobotState,
    guards: Vec<Guard<Position>>,
    record_history: bool,
    history_limit: usize,
}

impl EngineBuilder {
    pub fn new() -> Self {
        let grid = Grid::default();
        Self {
            width: grid.width(),
            height: grid.height(),
            initial: RobotState::Unplaced,
            guards: Vec::new(),
            record_history: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the grid dimensions
    pub fn grid(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Start from `state` instead of unplaced
    pub fn initial(mut self, state: RobotState) -> Self {
        self.initial = state;
        self
    }

    /// Add a guard every position must satisfy
    pub fn guard<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Position) -> bool + Send + Sync + 'static,
    {
        self.guards.push(Guard::new(predicate));
        self
    }

    /// Turn transition history on or off (on by default)
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Keep at most `limit` transitions, dropping the oldest first
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the engine.
    /// Returns an error if the grid is empty or the initial state is not admitted.
    pub fn build(self) -> Result<Engine, BuildError> {
        let grid = Grid::new(self.width, self.height)?;
        let tabletop = Tabletop::new(grid, self.guards);

        if let RobotState::Placed { position, .. } = self.initial {
            tabletop.admit(position).map_err(|err| match err {
                TransitionError::GuardBlocked { position } => {
                    BuildError::InitialStateBlocked { position }
                }
                _ => BuildError::InitialStateOutOfBounds { position },
            })?;
        }

        let history_limit = self.record_history.then_some(self.history_limit);
        Ok(Engine::from_parts(self.initial, tabletop, history_limit))
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
