//! Game parameters.
//!
//! A game is configured by two parameters, matching the host framework's
//! parameter names:
//!
//! - `board_size`: the board order `k >= 2`
//! - `ansi_color_output`: color the text rendering for a terminal
//!
//! Parameters can come from serde (JSON, TOML, ...) or from the framework's
//! textual form, e.g. `geodesic_y(board_size=5,ansi_color_output=true)`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::graph::{cell_count, DEFAULT_ORDER, MIN_ORDER};

/// Short name the game is registered under.
pub const GAME_NAME: &str = "geodesic_y";

/// Validated game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board order (subdivision depth).
    #[serde(rename = "board_size")]
    pub board_order: u16,

    /// Emit ANSI color codes when rendering the board.
    pub ansi_color_output: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_order: DEFAULT_ORDER,
            ansi_color_output: false,
        }
    }
}

impl GameConfig {
    /// Create a config for the given board order.
    #[must_use]
    pub fn new(board_order: u16) -> Self {
        Self {
            board_order,
            ..Self::default()
        }
    }

    /// Set the board order.
    #[must_use]
    pub fn with_board_order(mut self, board_order: u16) -> Self {
        self.board_order = board_order;
        self
    }

    /// Enable or disable ANSI colors in board rendering.
    #[must_use]
    pub fn with_ansi_color_output(mut self, enabled: bool) -> Self {
        self.ansi_color_output = enabled;
        self
    }

    /// Number of cells on the configured board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        cell_count(self.board_order)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_order < MIN_ORDER {
            return Err(ConfigError::Validation(format!(
                "board_size must be >= {MIN_ORDER}, got {}",
                self.board_order
            )));
        }
        if self.cell_count() > usize::from(u16::MAX) {
            return Err(ConfigError::Validation(format!(
                "board_size {} has too many cells ({})",
                self.board_order,
                self.cell_count()
            )));
        }
        Ok(())
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "board_size" => self.board_order = value.parse().map_err(|_| invalid())?,
            "ansi_color_output" => self.ansi_color_output = value.parse().map_err(|_| invalid())?,
            other => return Err(ConfigError::UnknownParameter(other.to_string())),
        }
        Ok(())
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    /// Parse `geodesic_y(key=value,...)`, `key=value,...` or the bare game
    /// name. Missing parameters keep their defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let params = match s.find('(') {
            Some(open) => {
                let name = s[..open].trim();
                if name != GAME_NAME {
                    return Err(ConfigError::Malformed(format!(
                        "expected game '{GAME_NAME}', got '{name}'"
                    )));
                }
                s[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| ConfigError::Malformed(format!("missing ')' in '{s}'")))?
            }
            None if s == GAME_NAME => "",
            None => s,
        };

        let mut config = Self::default();
        for pair in params.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::Malformed(format!("expected key=value, got '{pair}'")))?;
            config.set_param(key.trim(), value.trim())?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{GAME_NAME}(board_size={},ansi_color_output={})",
            self.board_order, self.ansi_color_output
        )
    }
}
