//! Minimax Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over material and center
//! control. This is the engine that plays the automated side.

use chess_core::{choose_move_with_depth, Board, Color, Decision, Engine, SearchResult};
use tracing::{debug, info};


/// Deepest search the engine accepts below its own move.
pub const MAX_DEPTH: u8 = 4;

/// Engine using the core minimax search.
///
/// `depth` counts the plies searched after the engine's own candidate move,
/// so the default of 2 looks three half-moves ahead.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    /// Node counter for statistics
    nodes: u64,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(chess_core::SEARCH_DEPTH)
    }
}

impl MinimaxEngine {
    /// Depths above [`MAX_DEPTH`] are clamped.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.min(MAX_DEPTH),
            nodes: 0,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        self.nodes = 0;
        let (decision, score) = choose_move_with_depth(board, side, self.depth, &mut self.nodes);

        match decision {
            Decision::Move(mv) => debug!(
                %side,
                mv = %mv,
                score,
                nodes = self.nodes,
                depth = self.depth,
                "move chosen"
            ),
            Decision::Terminal(outcome) => info!(%side, ?outcome, "no legal moves"),
        }

        SearchResult {
            decision,
            score,
            depth: self.depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
