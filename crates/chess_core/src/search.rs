//! Fixed-depth minimax with alpha-beta pruning

use crate::{
    board::Board,
    eval::{score, Score},
    movegen::all_moves_into,
    types::{Color, Move},
};

/// Plies searched below the automated side's own move.
pub const SEARCH_DEPTH: u8 = 2;

/// How a game ended, from the point of view of the automated side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The automated side had no legal move.
    HumanWins,
    /// The automated side's move left the opponent without a legal move.
    EngineWins,
}

/// What the search decided for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Move(Move),
    Terminal(Outcome),
}

impl Decision {
    pub fn best_move(self) -> Option<Move> {
        match self {
            Decision::Move(mv) => Some(mv),
            Decision::Terminal(_) => None,
        }
    }
}

/// Scores `board` by minimax to `depth` plies.
///
/// `maximizing` means Black is to move. A side with no moves is scored as
/// lost for that side: −∞ when maximizing, +∞ when minimizing.
pub fn minimax(board: &Board, depth: u8, alpha: Score, beta: Score, maximizing: bool) -> Score {
    let mut nodes = 0;
    search_node(board, depth, alpha, beta, maximizing, &mut nodes)
}

/// Picks a move for `side` with the default search depth.
pub fn choose_move(board: &Board, side: Color) -> Decision {
    let mut nodes = 0;
    choose_move_with_depth(board, side, SEARCH_DEPTH, &mut nodes).0
}

/// Picks a move for `side`, scoring each candidate with a `depth`-ply
/// minimax search of the reply.
///
/// Black keeps the strictly highest score and White the strictly lowest, so
/// on ties the first move in scan order wins. Returns the decision and the
/// score of the chosen line (±∞ when the side has no moves).
pub fn choose_move_with_depth(
    board: &Board,
    side: Color,
    depth: u8,
    nodes: &mut u64,
) -> (Decision, Score) {
    let mut moves = Vec::with_capacity(64);
    all_moves_into(board, side, &mut moves);

    if moves.is_empty() {
        let lost = match side {
            Color::Black => Score::NEG_INFINITY,
            Color::White => Score::INFINITY,
        };
        return (Decision::Terminal(Outcome::HumanWins), lost);
    }

    let maximizing = side == Color::Black;
    let mut best = moves[0];
    let mut best_score = if maximizing {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    };
    let mut first = true;

    for mv in moves {
        let next = board.apply(mv);
        *nodes += 1;

        let s = search_node(
            &next,
            depth,
            Score::NEG_INFINITY,
            Score::INFINITY,
            !maximizing,
            nodes,
        );

        let better = if maximizing {
            s > best_score
        } else {
            s < best_score
        };
        if first || better {
            best_score = s;
            best = mv;
            first = false;
        }
    }

    (Decision::Move(best), best_score)
}

fn search_node(
    board: &Board,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    nodes: &mut u64,
) -> Score {
    if depth == 0 {
        return score(board);
    }

    let side = if maximizing { Color::Black } else { Color::White };
    let mut moves = Vec::with_capacity(64);
    all_moves_into(board, side, &mut moves);

    if moves.is_empty() {
        return if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };
    }

    if maximizing {
        let mut best = Score::NEG_INFINITY;
        for mv in moves {
            let next = board.apply(mv);
            *nodes += 1;
            best = best.max(search_node(&next, depth - 1, alpha, beta, false, nodes));
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = Score::INFINITY;
        for mv in moves {
            let next = board.apply(mv);
            *nodes += 1;
            best = best.min(search_node(&next, depth - 1, alpha, beta, true, nodes));
            beta = beta.min(best);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
