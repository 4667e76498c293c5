//! Settings file for the terminal front end

use chess_core::{Board, Color, ParseError};
use minimax_engine::MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid start_position: {0}")]
    StartPosition(#[from] ParseError),
}

/// Front end configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Side played by the engine; the human gets the other one
    pub engine_side: Color,
    /// Plies searched below the engine's own move
    pub depth: u8,
    /// Print the engine's evaluation after each of its moves
    pub show_score: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Optional board diagram to start from instead of the initial layout
    pub start_position: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            engine_side: Color::Black,
            depth: chess_core::SEARCH_DEPTH,
            show_score: false,
            log_level: "warn".to_string(),
            start_position: None,
        }
    }
}

impl PlayConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search depth handed to the engine, clamped to `1..=MAX_DEPTH`
    pub fn engine_depth(&self) -> u8 {
        self.depth.clamp(1, MAX_DEPTH)
    }

    /// The position the game starts from
    pub fn start_board(&self) -> Result<Board, ConfigError> {
        match &self.start_position {
            Some(diagram) => Ok(Board::from_diagram(diagram)?),
            None => Ok(Board::initial()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
