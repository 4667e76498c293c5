use std::path::PathBuf;

use chess_core::Color;
use clap::{Parser, ValueEnum};

use crate::config::PlayConfig;

#[derive(Parser, Debug)]
#[command(name = "play", version, about = "Play against the minimax engine in the terminal")]
pub struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plies searched below the engine's own move
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Side the engine plays
    #[arg(short, long, value_enum)]
    pub engine_side: Option<Side>,

    /// Print the engine's evaluation after each of its moves
    #[arg(long)]
    pub show_score: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

impl Cli {
    /// Command line flags take precedence over the settings file.
    pub fn apply(&self, config: &mut PlayConfig) {
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(side) = self.engine_side {
            config.engine_side = side.into();
        }
        if self.show_score {
            config.show_score = true;
        }
    }
}
