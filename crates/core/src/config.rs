//! Game configuration
//!
//! All fields have defaults. Values come from, in order: the defaults, an
//! optional JSON file, and per-field environment overrides. Every source ends
//! in [`GameConfig::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LinesError, Result};
use crate::types::{
    DEFAULT_ANIMATION_STEP_MS, DEFAULT_BOARD_SIZE, DEFAULT_COLORS_NUMBER,
    DEFAULT_MIN_COLLAPSING_LINE, DEFAULT_NEW_DROP_BALLS, DEFAULT_STARTING_BALLS, MAX_BOARD_SIZE,
    MAX_COLORS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: u8,
    /// Number of ball colors
    pub colors_number: u8,
    /// Balls placed when a game starts
    pub starting_balls: usize,
    /// Balls dropped after a turn without a collapse
    pub new_drop_balls: usize,
    /// Shortest run that collapses
    pub min_collapsing_line: usize,
    /// Delay between two steps of a ball move
    pub animation_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            colors_number: DEFAULT_COLORS_NUMBER,
            starting_balls: DEFAULT_STARTING_BALLS,
            new_drop_balls: DEFAULT_NEW_DROP_BALLS,
            min_collapsing_line: DEFAULT_MIN_COLLAPSING_LINE,
            animation_step_ms: DEFAULT_ANIMATION_STEP_MS,
        }
    }
}

impl GameConfig {
    pub fn cell_count(&self) -> usize {
        self.board_size as usize * self.board_size as usize
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(LinesError::InvalidConfig(format!(
                "board_size must be in 1..={}",
                MAX_BOARD_SIZE
            )));
        }
        if self.colors_number == 0 || self.colors_number > MAX_COLORS {
            return Err(LinesError::InvalidConfig(format!(
                "colors_number must be in 1..={}",
                MAX_COLORS
            )));
        }
        if self.min_collapsing_line == 0 {
            return Err(LinesError::InvalidConfig(
                "min_collapsing_line must be > 0".into(),
            ));
        }
        if self.starting_balls > self.cell_count() {
            return Err(LinesError::InvalidConfig(format!(
                "starting_balls ({}) exceeds the {} board cells",
                self.starting_balls,
                self.cell_count()
            )));
        }
        if self.new_drop_balls > self.cell_count() {
            return Err(LinesError::InvalidConfig(format!(
                "new_drop_balls ({}) exceeds the {} board cells",
                self.new_drop_balls,
                self.cell_count()
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LinesError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Build from the process environment.
    ///
    /// `LINES_CONFIG` names an optional JSON file; `LINES_BOARD_SIZE`,
    /// `LINES_COLORS`, `LINES_STARTING_BALLS`, `LINES_NEW_DROP_BALLS`,
    /// `LINES_MIN_LINE` and `LINES_ANIMATION_STEP_MS` override single fields.
    /// Unparsable overrides are ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`GameConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup("LINES_CONFIG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            Some(path) => {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| LinesError::ConfigRead {
                        path: path.clone().into(),
                        source: e,
                    })?;
                serde_json::from_str(&content)?
            }
            None => GameConfig::default(),
        };

        fn parsed<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            lookup(key).and_then(|s| s.trim().parse().ok())
        }

        if let Some(v) = parsed(&lookup, "LINES_BOARD_SIZE") {
            config.board_size = v;
        }
        if let Some(v) = parsed(&lookup, "LINES_COLORS") {
            config.colors_number = v;
        }
        if let Some(v) = parsed(&lookup, "LINES_STARTING_BALLS") {
            config.starting_balls = v;
        }
        if let Some(v) = parsed(&lookup, "LINES_NEW_DROP_BALLS") {
            config.new_drop_balls = v;
        }
        if let Some(v) = parsed(&lookup, "LINES_MIN_LINE") {
            config.min_collapsing_line = v;
        }
        if let Some(v) = parsed(&lookup, "LINES_ANIMATION_STEP_MS") {
            config.animation_step_ms = v;
        }

        config.validate()?;
        Ok(config)
    }
}
