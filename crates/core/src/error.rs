//! Error types for chess-rules-core

use thiserror::Error;

use crate::board::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("square {0:?} is off the board")]
    OutOfBounds(Coord),

    #[error("no piece of the side to move on {0}")]
    NoPieceOrWrongTurn(Coord),

    #[error("illegal move {from}{to}")]
    IllegalMove { from: Coord, to: Coord },

    #[error("move {from}{to} leaves the king in check")]
    SelfCheck { from: Coord, to: Coord },

    #[error("invalid square name: {0}")]
    InvalidSquare(String),

    #[error("FEN parsing error: {0}")]
    Fen(String),
}

pub type Result<T> = std::result::Result<T, Error>;
