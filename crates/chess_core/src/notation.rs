//! Coordinate notation: files a-h left to right, rank 8 on row 0.

use std::fmt;

use crate::{board::Board, error::ParseError, movegen::all_moves, types::*};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

pub fn parse_square(txt: &str) -> Result<Square, ParseError> {
    let b = txt.as_bytes();
    if b.len() != 2 {
        return Err(ParseError::InvalidSquare(txt.to_string()));
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return Err(ParseError::InvalidSquare(txt.to_string()));
    }
    Ok(Square {
        row: b'8' - r,
        col: f - b'a',
    })
}

/// Parses `e2e4`-style input and matches it against the legal moves of
/// `side`, so only moves the generator would produce are accepted.
pub fn parse_move(board: &Board, side: Color, txt: &str) -> Result<Move, ParseError> {
    let txt = txt.trim();
    if txt.len() != 4 || !txt.is_ascii() {
        return Err(ParseError::InvalidMove(txt.to_string()));
    }
    let from = parse_square(&txt[0..2])?;
    let to = parse_square(&txt[2..4])?;

    if side_of(board.piece_at(from)) != Some(side) {
        return Err(ParseError::NoPiece(from.to_string()));
    }

    let mv = Move::new(from, to);
    if all_moves(board, side).contains(&mv) {
        Ok(mv)
    } else {
        Err(ParseError::IllegalMove(txt.to_string()))
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
