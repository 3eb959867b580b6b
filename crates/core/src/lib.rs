//! Chess Rules Core Library
//!
//! A two-player rules engine: board model, move legality, check and
//! checkmate detection, pawn promotion. Presentation layers hold a
//! [`GameState`], feed it coordinate pairs through
//! [`GameState::attempt_move`] and render whatever comes back.

use serde::{Deserialize, Serialize};

pub mod board;
pub mod error;
pub mod game;
pub mod parser;
pub mod rules;

pub use board::{Board, Color, Coord, Piece, PieceKind};
pub use error::{Error, Result};
pub use game::{GameState, MoveReport, MoveStatus};
pub use rules::{
    apply_move, detect_promotion, has_any_legal_move, is_king_in_check, is_legal_move,
    GameStatus, Move, MoveOutcome,
};

/// Basic position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionInfo {
    pub piece_count: u32,
    pub legal_move_count: u32,
    pub side_to_move: Color,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Summarises a position for display
pub fn analyze_position(state: &GameState) -> PositionInfo {
    let piece_count = state.board.piece_count() as u32;
    let legal_move_count = state.legal_moves().len() as u32;
    let is_check = state.is_check();
    let is_checkmate = is_check && legal_move_count == 0;

    PositionInfo {
        piece_count,
        legal_move_count,
        side_to_move: state.turn,
        is_check,
        is_checkmate,
    }
}

/// Creates the standard starting position
pub fn new_game() -> GameState {
    GameState::new()
}

/// Same as [`new_game`]; callers drop their old state
pub fn restart() -> GameState {
    new_game()
}
