//! Per-piece movement rules
//!
//! These are pattern checks only: they look at the shape of the move, the
//! squares it passes over and the destination occupant. Whether the move
//! exposes the mover's king is decided when the move is applied.

use crate::board::{Board, Color, Coord, Piece, PieceKind};

/// True if `piece` standing on `from` may move to `to` on `board`.
///
/// Total over its inputs: off-board squares and null moves are simply not
/// legal.
pub fn is_legal_move(piece: Piece, from: Coord, to: Coord, board: &Board) -> bool {
    if !from.is_on_board() || !to.is_on_board() || from == to {
        return false;
    }

    let target = occupant(board, to);
    if matches!(target, Some(p) if p.color == piece.color) {
        return false;
    }

    let dr = to.row - from.row;
    let dc = to.col - from.col;

    match piece.kind {
        PieceKind::Pawn => pawn_move(piece.color, from, dr, dc, target, board),
        PieceKind::Rook => is_straight(dr, dc) && path_clear(from, to, board),
        PieceKind::Knight => (dr.abs() * dc.abs()) == 2,
        PieceKind::Bishop => is_diagonal(dr, dc) && path_clear(from, to, board),
        PieceKind::Queen => {
            (is_straight(dr, dc) || is_diagonal(dr, dc)) && path_clear(from, to, board)
        }
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

fn pawn_move(
    color: Color,
    from: Coord,
    dr: i8,
    dc: i8,
    target: Option<Piece>,
    board: &Board,
) -> bool {
    let dir = color.pawn_direction();

    if dc == 0 && dr == dir {
        return target.is_none();
    }

    if dc == 0 && dr == 2 * dir {
        return from.row == color.pawn_home_row()
            && target.is_none()
            && occupant(board, from.offset(dir, 0)).is_none();
    }

    // own-color targets were rejected by the caller
    if dc.abs() == 1 && dr == dir {
        return target.is_some();
    }

    false
}

fn is_straight(dr: i8, dc: i8) -> bool {
    (dr == 0) != (dc == 0)
}

fn is_diagonal(dr: i8, dc: i8) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

/// Every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal lines.
fn path_clear(from: Coord, to: Coord, board: &Board) -> bool {
    let step_r = (to.row - from.row).signum();
    let step_c = (to.col - from.col).signum();

    let mut cur = from.offset(step_r, step_c);
    while cur != to {
        if occupant(board, cur).is_some() {
            return false;
        }
        cur = cur.offset(step_r, step_c);
    }
    true
}

/// Callers have already checked that `at` is on the board.
fn occupant(board: &Board, at: Coord) -> Option<Piece> {
    board.piece_at(at).ok().flatten()
}
