//! One automated turn: ask an engine, apply its move, check for game end.

use tracing::trace;

use crate::{
    board::Board,
    movegen::has_moves,
    search::{Decision, Outcome},
    types::{Color, Move},
    Engine,
};

/// Result of letting the automated side move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Turn {
    /// The engine moved. `outcome` is set when the opponent has no reply.
    Played {
        mv: Move,
        board: Board,
        outcome: Option<Outcome>,
    },
    /// The engine had no legal move.
    Over(Outcome),
}

/// Lets `engine` play `side` on `board`.
///
/// Neither terminal check looks at king safety: a side without generated
/// moves has lost.
pub fn engine_turn(engine: &mut dyn Engine, board: &Board, side: Color) -> Turn {
    let result = engine.search(board, side);
    trace!(
        engine = engine.name(),
        nodes = result.nodes,
        score = result.score,
        "search finished"
    );

    match result.decision {
        Decision::Terminal(outcome) => Turn::Over(outcome),
        Decision::Move(mv) => {
            let next = board.apply(mv);
            let outcome = if has_moves(&next, side.other()) {
                None
            } else {
                Some(Outcome::EngineWins)
            };
            Turn::Played {
                mv,
                board: next,
                outcome,
            }
        }
    }
}
