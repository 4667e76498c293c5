use crate::{
    board::Board,
    movegen::all_moves_into,
    types::{Color, Move},
};

/// Pure perft node count.
/// Counts the leaves of the move tree from `board` down to `depth`, with
/// `side` to move first.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    fn inner(board: &Board, side: Color, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let (buf, rest) = match layers.split_first_mut() {
            Some(split) if depth > 0 => split,
            _ => return 1,
        };

        all_moves_into(board, side, buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += inner(&board.apply(mv), side.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, side, depth, &mut layers[..])
}
