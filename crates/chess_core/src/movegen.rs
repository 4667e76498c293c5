use crate::{board::Board, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Destination squares for the piece on (row, col).
///
/// Empty and off-board origins yield no moves. King safety is never
/// considered. The order is deterministic so that search results are
/// reproducible.
pub fn moves_from(board: &Board, row: i8, col: i8) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    if let Some(from) = sq(row, col) {
        destinations_into(board, from, &mut out);
    }
    out
}

/// Every move for `side`, scanning the board row by row and each piece in
/// its own generation order.
pub fn all_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    all_moves_into(board, side, &mut out);
    out
}

/// Like [`all_moves`], reusing the provided buffer.
pub fn all_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    let mut targets = Vec::with_capacity(28);
    for (from, pc) in board.pieces() {
        if pc.color != side {
            continue;
        }
        targets.clear();
        destinations_into(board, from, &mut targets);
        out.extend(targets.iter().map(|&to| Move::new(from, to)));
    }
}

pub fn has_moves(board: &Board, side: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    board.pieces().any(|(from, pc)| {
        if pc.color != side {
            return false;
        }
        targets.clear();
        destinations_into(board, from, &mut targets);
        !targets.is_empty()
    })
}

fn destinations_into(board: &Board, from: Square, out: &mut Vec<Square>) {
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, out),
        PieceKind::Knight => gen_step(board, from, pc.color, out, &KNIGHT_DELTAS),
        PieceKind::Bishop => gen_slider(board, from, pc.color, out, &DIAGONALS),
        PieceKind::Rook => gen_slider(board, from, pc.color, out, &ORTHOGONALS),
        PieceKind::Queen => gen_slider(board, from, pc.color, out, &ALL_DIRECTIONS),
        PieceKind::King => gen_step(board, from, pc.color, out, &KING_DELTAS),
    }
}

/// What a piece of color `c` finds on `to`.
enum Target {
    Empty,
    Enemy,
    Friendly,
}

fn target(board: &Board, to: Square, c: Color) -> Target {
    match board.piece_at(to) {
        None => Target::Empty,
        Some(pc) if pc.color != c => Target::Enemy,
        Some(_) => Target::Friendly,
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.forward();

    // forward 1
    if let Some(to) = from.offset(dir, 0) {
        if let Target::Empty = target(board, to, c) {
            out.push(to);

            // forward 2 from start
            if from.row == c.pawn_row() {
                if let Some(to2) = from.offset(2 * dir, 0) {
                    if let Target::Empty = target(board, to2, c) {
                        out.push(to2);
                    }
                }
            }
        }
    }

    // captures only
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc) {
            if let Target::Enemy = target(board, to, c) {
                out.push(to);
            }
        }
    }
}

fn gen_step(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, deltas: &[(i8, i8)]) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match target(board, to, c) {
                Target::Empty | Target::Enemy => out.push(to),
                Target::Friendly => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Square>, dirs: &[(i8, i8)]) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match target(board, to, c) {
                Target::Empty => out.push(to),
                Target::Enemy => {
                    out.push(to);
                    break;
                }
                Target::Friendly => break,
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
