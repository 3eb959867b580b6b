//! Caller-facing result of a move attempt

use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece};
use crate::error::Error;
use crate::rules::{GameStatus, MoveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveStatus {
    Normal,
    Check,
    Checkmate { winner: Color },
    IllegalMove,
    SelfCheck,
    NoPieceOrWrongTurn,
    OutOfBounds,
}

impl MoveStatus {
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            MoveStatus::Normal | MoveStatus::Check | MoveStatus::Checkmate { .. }
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveStatus::Normal => "normal",
            MoveStatus::Check => "check",
            MoveStatus::Checkmate { .. } => "checkmate",
            MoveStatus::IllegalMove => "illegal_move",
            MoveStatus::SelfCheck => "self_check",
            MoveStatus::NoPieceOrWrongTurn => "no_piece_or_wrong_turn",
            MoveStatus::OutOfBounds => "out_of_bounds",
        }
    }
}

impl From<GameStatus> for MoveStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Normal => MoveStatus::Normal,
            GameStatus::Check => MoveStatus::Check,
            GameStatus::Checkmate { winner } => MoveStatus::Checkmate { winner },
        }
    }
}

impl From<&Error> for MoveStatus {
    fn from(error: &Error) -> Self {
        match error {
            Error::OutOfBounds(_) => MoveStatus::OutOfBounds,
            Error::NoPieceOrWrongTurn(_) => MoveStatus::NoPieceOrWrongTurn,
            Error::SelfCheck { .. } => MoveStatus::SelfCheck,
            // parse errors never come out of move application
            Error::IllegalMove { .. } | Error::InvalidSquare(_) | Error::Fen(_) => {
                MoveStatus::IllegalMove
            }
        }
    }
}

/// Everything a presentation layer needs after an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub accepted: bool,
    pub captured: Option<Piece>,
    pub status: MoveStatus,
    /// Side to move after the attempt. Unchanged when rejected.
    pub turn: Color,
}

impl MoveReport {
    pub(crate) fn accepted(outcome: &MoveOutcome) -> Self {
        Self {
            accepted: true,
            captured: outcome.captured,
            status: outcome.status.into(),
            turn: outcome.turn,
        }
    }

    pub(crate) fn rejected(error: &Error, turn: Color) -> Self {
        Self {
            accepted: false,
            captured: None,
            status: error.into(),
            turn,
        }
    }
}
