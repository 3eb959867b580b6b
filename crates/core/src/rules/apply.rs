//! Move application, promotion and post-move status

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::check::{has_any_legal_move, is_king_in_check};
use super::movement::is_legal_move;
use crate::board::{Color, Coord, Piece, PieceKind};
use crate::error::{Error, Result};
use crate::game::GameState;

/// Position status after an accepted move, seen from the side now to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate { winner: Color },
}

/// What an accepted move did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: Coord,
    pub to: Coord,
    /// The moved piece as it stands on `to`, after any promotion.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
    pub status: GameStatus,
    /// Side to move after this move.
    pub turn: Color,
}

/// True if `piece` arriving on `to` must promote.
pub fn detect_promotion(piece: Piece, to: Coord) -> bool {
    piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row()
}

/// Plays `from` -> `to` for the side to move.
///
/// On any error the state is exactly as it was before the call. A pawn that
/// reaches the last row becomes `promotion`, or a queen when the choice is
/// missing or not a promotable kind.
pub fn apply_move(
    state: &mut GameState,
    from: Coord,
    to: Coord,
    promotion: Option<PieceKind>,
) -> Result<MoveOutcome> {
    from.index()?;
    to.index()?;

    let mover = state.turn;
    let piece = match state.board.piece_at(from)? {
        Some(p) if p.color == mover => p,
        _ => return Err(Error::NoPieceOrWrongTurn(from)),
    };

    if !is_legal_move(piece, from, to, &state.board) {
        debug!(%from, %to, %piece, "illegal move rejected");
        return Err(Error::IllegalMove { from, to });
    }

    let captured = state.board.move_piece(from, to)?;

    let promoted_to = if detect_promotion(piece, to) {
        let kind = PieceKind::promotion_or_queen(promotion);
        state.board.place(to, Piece::new(mover, kind))?;
        Some(kind)
    } else {
        None
    };

    if is_king_in_check(mover, &state.board) {
        state.board.place(from, piece)?;
        match captured {
            Some(p) => state.board.place(to, p)?,
            None => {
                state.board.remove(to)?;
            }
        }
        debug!(%from, %to, %piece, "move rejected, king left in check");
        return Err(Error::SelfCheck { from, to });
    }

    let opponent = mover.opposite();
    state.turn = opponent;

    let status = if is_king_in_check(opponent, &state.board) {
        if has_any_legal_move(opponent, &state.board) {
            GameStatus::Check
        } else {
            info!(winner = %mover, "checkmate");
            GameStatus::Checkmate { winner: mover }
        }
    } else {
        GameStatus::Normal
    };

    let moved = Piece::new(mover, promoted_to.unwrap_or(piece.kind));
    debug!(%from, %to, piece = %moved, ?captured, ?status, "move applied");

    Ok(MoveOutcome {
        from,
        to,
        piece: moved,
        captured,
        promoted_to,
        status,
        turn: opponent,
    })
}
