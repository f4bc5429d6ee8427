//! Engine configuration.
//!
//! Configuration is plain serde data; every field has a default so an empty
//! JSON object yields the standard 5x5 table with bounded history recording on.

use crate::core::Grid;
use crate::engine::{BuildError, Engine, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        let grid = Grid::default();
        Self {
            width: grid.width(),
            height: grid.height(),
        }
    }
}

/// Top-level engine configuration.
///
/// # Example
///
/// ```rust
/// use toy_robot::config::RobotConfig;
///
/// let config = RobotConfig::from_json(r#"{ "grid": { "width": 3, "height": 3 } }"#).unwrap();
/// let mut engine = config.build_engine().unwrap();
///
/// engine.execute("PLACE 2,2,NORTH");
/// engine.execute("MOVE");
/// assert_eq!(engine.execute("REPORT").as_deref(), Some("2,2,NORTH"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub grid: GridConfig,
    pub record_history: bool,
    /// Maximum number of transitions kept in the engine's history.
    pub history_limit: usize,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            record_history: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RobotConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build an unplaced engine from this configuration.
    pub fn build_engine(&self) -> Result<Engine, ConfigError> {
        let engine = Engine::builder()
            .grid(self.grid.width, self.grid.height)
            .record_history(self.record_history)
            .history_limit(self.history_limit)
            .build()?;
        Ok(engine)
    }
}
