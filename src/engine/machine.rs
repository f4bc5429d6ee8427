//! Engine holding the single robot state.

use super::builder::{EngineBuilder, DEFAULT_HISTORY_LIMIT};
use super::transition::{transition, Tabletop};
use crate::core::{Command, Grid, RobotState, State, StateHistory, StateTransition};
use crate::parser;
use chrono::Utc;
use tracing::{debug, trace};

/// Owns the robot state and applies commands to it in order.
///
/// Bad input never escapes: unparseable lines and commands that would take
/// the robot off the tabletop are dropped, leaving the state unchanged.
///
/// # Example
///
/// ```rust
/// use toy_robot::engine::Engine;
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.execute("REPORT"), None);
/// assert_eq!(engine.execute("PLACE 0,0,NORTH"), None);
/// assert_eq!(engine.execute("MOVE"), None);
/// assert_eq!(engine.execute("REPORT").as_deref(), Some("0,1,NORTH"));
/// ```
#[derive(Debug)]
pub struct Engine {
    state: RobotState,
    tabletop: Tabletop,
    history: StateHistory<RobotState>,
    record_history: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Unplaced robot on the default 5x5 grid.
    pub fn new() -> Self {
        Self::from_parts(
            RobotState::Unplaced,
            Tabletop::default(),
            Some(DEFAULT_HISTORY_LIMIT),
        )
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// `history_limit` of `None` turns recording off.
    pub(crate) fn from_parts(
        state: RobotState,
        tabletop: Tabletop,
        history_limit: Option<usize>,
    ) -> Self {
        Self {
            state,
            tabletop,
            history: StateHistory::with_limit(history_limit.unwrap_or(0)),
            record_history: history_limit.is_some_and(|limit| limit > 0),
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn grid(&self) -> Grid {
        self.tabletop.grid()
    }

    /// Most recent transitions, bounded by the history limit. Empty when
    /// history recording is off.
    pub fn history(&self) -> &StateHistory<RobotState> {
        &self.history
    }

    /// Apply a parsed command, returning the report line if there is one.
    pub fn apply(&mut self, command: &Command) -> Option<String> {
        match transition(&self.state, command, &self.tabletop) {
            Ok(step) => {
                self.commit(command, step.state);
                step.output
            }
            Err(err) => {
                debug!(%command, state = self.state.name(), error = %err, "ignoring command");
                None
            }
        }
    }

    /// Parse and apply one line of input.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        match parser::parse(line) {
            Ok(command) => self.apply(&command),
            Err(err) => {
                debug!(line, error = %err, "discarding unrecognised line");
                None
            }
        }
    }

    /// Execute each line in order, collecting the report lines.
    pub fn run<I>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.execute(line.as_ref()))
            .collect()
    }

    fn commit(&mut self, command: &Command, next: RobotState) {
        if next == self.state {
            return;
        }

        trace!(%command, from = ?self.state, to = ?next, "applied command");
        if self.record_history {
            self.history.push(StateTransition {
                from: self.state,
                to: next,
                command: *command,
                timestamp: Utc::now(),
            });
        }
        self.state = next;
    }
}

/// Run every line of `script` against a fresh default engine.
///
/// # Example
///
/// ```rust
/// use toy_robot::engine::run_script;
///
/// let output = run_script("PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT");
/// assert_eq!(output, vec!["3,3,NORTH".to_string()]);
/// ```
pub fn run_script(script: &str) -> Vec<String> {
    Engine::new().run(script.lines())
}
