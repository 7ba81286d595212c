//! Runtime configuration for the terminal driver.
//!
//! Loaded from YAML. A missing file yields defaults; a malformed one is an
//! error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds on each clock at game start.
    pub initial_seconds: u32,
    /// Interval between clock ticks.
    pub tick_millis: u64,
    /// Chess glyphs instead of FEN letters.
    pub unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_seconds: DEFAULT_CLOCK_SECONDS,
            tick_millis: 1000,
            unicode: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> ChessResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> ChessResult<Self> {
        let cfg: Self = serde_yaml::from_str(content).map_err(|err| ChessError::Config(err.to_string()))?;
        if cfg.tick_millis == 0 {
            return Err(ChessError::Config("tick_millis must be positive".to_owned()));
        }
        Ok(cfg)
    }
}
