use thiserror::Error;

/// Errors produced when reading squares, moves or board diagrams from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square `{0}`, expected a file a-h followed by a rank 1-8")]
    InvalidSquare(String),

    #[error("invalid move `{0}`, expected coordinate notation such as e2e4")]
    InvalidMove(String),

    #[error("no piece of the side to move on {0}")]
    NoPiece(String),

    #[error("move `{0}` is not legal in this position")]
    IllegalMove(String),

    #[error("board diagram must have 8 rows, found {0}")]
    RowCount(usize),

    #[error("board diagram row {row} must have 8 squares, found {found}")]
    RowLength { row: usize, found: usize },

    #[error("unknown piece letter `{0}` in board diagram")]
    PieceChar(char),
}
