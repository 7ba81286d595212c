//! Errors used throughout the engine.
//!
//! The rules engine itself signals rejection with `None` or an empty move
//! list. `ChessError` carries the reason for callers that ask for it
//! (`try_*` entry points, parsers, configuration, and the terminal driver).

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};

#[derive(Error, Debug)]
pub enum ChessError {
    /// No piece stands on the requested origin square.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    /// The origin square holds a piece of the side not to move.
    #[error("piece on {position} does not belong to {expected}")]
    WrongColor { position: Position, expected: Color },

    /// The destination is not among the legal moves of the origin piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// A board expected to hold a king for `0` holds none.
    #[error("board has no {0} king")]
    MissingKing(Color),

    /// Raw coordinates outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN placement: {0}")]
    InvalidFen(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;
