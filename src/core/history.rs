//! Transition history tracking.
//!
//! Provides a record of the commands that changed the robot's state, in
//! the order they were applied. A history may be bounded, in which case
//! the oldest transitions are dropped first.

use super::command::Command;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state-changing command.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The command that caused the transition
    pub command: Command,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended and leaves
/// the original untouched. The engine appends in place instead.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Command, Facing, RobotState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: RobotState::Unplaced,
///     to: RobotState::placed(0, 0, Facing::North),
///     command: Command::place(0, 0, Facing::North),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: RobotState::placed(0, 0, Facing::North),
///     to: RobotState::placed(0, 1, Facing::North),
///     command: Command::Move,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Unplaced -> (0,0) -> (0,1)
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history that keeps at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(1024)),
            limit: Some(limit),
        }
    }

    /// Maximum number of transitions kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. This copies every stored
    /// transition; use [`push`](Self::push) when the old history is not needed.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest one when full.
    pub fn push(&mut self, transition: StateTransition<S>) {
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All transitions, oldest first.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = &StateTransition<S>> + ExactSizeIterator + '_ {
        self.transitions.iter()
    }

    /// The most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
