pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::ParseError;
pub use eval::{score, Score};
pub use game::{engine_turn, Turn};
pub use movegen::*;
pub use notation::{parse_move, parse_square};
pub use perft::perft;
pub use search::{
    choose_move, choose_move_with_depth, minimax, Decision, Outcome, SEARCH_DEPTH,
};
pub use types::*;

// =============================================================================
// Engine trait, implemented by anything that can play the automated side
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// The chosen move, or the terminal outcome when there was none
    pub decision: Decision,
    /// Score of the chosen line, positive = good for Black
    pub score: Score,
    /// Plies searched below the root move
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Trait that all engines must implement.
pub trait Engine: Send {
    /// Choose a move for `side` on `board`.
    fn search(&mut self, board: &Board, side: Color) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
