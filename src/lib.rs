//! Toy Robot: a pure command interpreter for a robot on a bounded tabletop
//!
//! The crate follows a "pure core, imperative shell" split. Parsing and
//! state transitions are pure functions; the caller owns the read/print loop
//! and feeds lines in one at a time.
//!
//! # Core Concepts
//!
//! - **Parser**: `text -> Command | ParseError`, see [`parser::parse`]
//! - **Transition**: `(RobotState, Command) -> Step | TransitionError`, see
//!   [`engine::transition`]
//! - **Engine**: owns the single robot state and swallows rejected input
//! - **History**: immutable record of the commands that changed state
//!
//! Unrecognised lines and moves that would leave the table are dropped
//! silently; only `REPORT` on a placed robot produces output.
//!
//! # Example
//!
//! ```rust
//! use toy_robot::engine::Engine;
//!
//! let mut engine = Engine::new();
//! let output = engine.run(["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"]);
//! assert_eq!(output, vec!["3,3,NORTH".to_string()]);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod parser;

// Re-export commonly used types
pub use crate::core::{Command, Facing, Position, RobotState};
pub use engine::{run_script, Engine};
pub use parser::ParseError;
