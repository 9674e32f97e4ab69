use crate::types::{GameState, Location, Player};
use thiserror::Error;

/// Errors raised by board and game operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("location {location} is already occupied by {occupant}")]
    Occupied { location: Location, occupant: Player },

    #[error("location {location} is outside the {size}x{size} board")]
    OutOfBounds { location: Location, size: usize },

    #[error("invalid board dimensions: size {size}, win length {win_length} (need 1 <= win length <= size <= {max})", max = crate::board::MAX_SIZE)]
    InvalidDimensions { size: usize, win_length: usize },

    #[error("game is already over: {state}")]
    GameOver { state: GameState },
}

/// Errors raised while reading a board diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseBoardError {
    #[error("board diagram is empty")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("board diagram has {rows} rows of {cols} cells, but boards are square")]
    NotSquare { rows: usize, cols: usize },

    #[error("invalid cell character '{character}' at row {row}, column {col}")]
    InvalidCell {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("both players have a completed line")]
    TwoWinners,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Convenience alias for board results.
pub type Result<T> = std::result::Result<T, BoardError>;
