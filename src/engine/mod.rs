//! Command engine.
//!
//! [`transition`] is the pure `(state, command) -> step` function; [`Engine`]
//! wraps it around the single mutable robot state and feeds it parsed lines.

mod builder;
mod error;
mod machine;
mod transition;

pub use builder::{EngineBuilder, DEFAULT_HISTORY_LIMIT};
pub use error::{BuildError, TransitionError};
pub use machine::{run_script, Engine};
pub use transition::{transition, Step, Tabletop};
