use std::fmt;

use crate::{error::ParseError, types::*};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable 8x8 snapshot of the piece layout.
///
/// There is no public way to change a `Board` in place: [`Board::apply`]
/// and the constructors are the only ways to obtain one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn initial() -> Self {
        let mut b = Board::empty();

        for col in 0..8 {
            b.squares[0][col] = Some(Piece::new(Color::Black, BACK_RANK[col]));
            b.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[7][col] = Some(Piece::new(Color::White, BACK_RANK[col]));
        }
        b
    }

    /// Builds a board holding exactly the given pieces. Later entries win
    /// when a square is listed twice.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut b = Board::empty();
        for (s, pc) in pieces {
            b.set(s, Some(pc));
        }
        b
    }

    /// Parses the text layout printed by `Display`: 8 lines of 8 characters,
    /// row 0 first, `.` for an empty square, uppercase for White and
    /// lowercase for Black. Whitespace inside a line is ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ParseError::RowLength {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(ch).ok_or(ParseError::PieceChar(ch))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                b.squares[row][col] = Some(Piece::new(color, kind));
            }
        }
        Ok(b)
    }

    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.squares[s.row as usize][s.col as usize]
    }

    /// Lookup by raw coordinates; off-board reads as empty.
    pub fn get(&self, row: i8, col: i8) -> Option<Piece> {
        sq(row, col).and_then(|s| self.piece_at(s))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, pc)| {
                pc.map(|pc| {
                    (
                        Square {
                            row: row as u8,
                            col: col as u8,
                        },
                        pc,
                    )
                })
            })
        })
    }

    /// Returns a new board with the piece on `mv.from` moved to `mv.to`.
    ///
    /// A pawn landing on its promotion row becomes a queen. No legality is
    /// checked; an empty origin simply clears the destination.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = *self;
        let moved = self.piece_at(mv.from);

        next.set(mv.from, None);
        next.set(mv.to, moved);

        if let Some(pc) = moved {
            if pc.kind == PieceKind::Pawn && mv.to.row == pc.color.promotion_row() {
                next.set(mv.to, Some(Piece::new(pc.color, PieceKind::Queen)));
            }
        }
        next
    }

    fn set(&mut self, s: Square, pc: Option<Piece>) {
        self.squares[s.row as usize][s.col as usize] = pc;
    }
}

/// Free-function form of [`Board::apply`].
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    board.apply(Move::new(from, to))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.squares {
            let line: String = cells
                .iter()
                .map(|pc| pc.map_or('.', Piece::to_char))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
