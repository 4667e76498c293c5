use crate::{board::Board, types::*};

/// Evaluation score. Positive favors Black, the side the search maximizes.
pub type Score = f64;

const CENTER_WEIGHT: f64 = 5.0;

/// Static evaluation: material plus a bonus for pieces near the center.
/// White's pieces count negatively, Black's positively.
pub fn score(board: &Board) -> Score {
    board
        .pieces()
        .map(|(s, pc)| {
            let v = f64::from(pc.kind.value()) + center_bonus(s);
            match pc.color {
                Color::Black => v,
                Color::White => -v,
            }
        })
        .sum()
}

/// `(3.5 - |3.5 - col|) * 5 + (3.5 - |3.5 - row|) * 5`
#[inline]
pub fn center_bonus(s: Square) -> f64 {
    let closeness = |i: u8| 3.5 - (3.5 - f64::from(i)).abs();
    (closeness(s.col) + closeness(s.row)) * CENTER_WEIGHT
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
