//! Check, checkmate and legal-move enumeration

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::movement::is_legal_move;
use crate::board::{Board, Color, Coord, Piece};

/// A from/to pair. Promotion is resolved when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

/// True if any piece of the other color attacks the king of `color`.
///
/// A board without that king is never in check.
pub fn is_king_in_check(color: Color, board: &Board) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };

    board
        .pieces()
        .filter(|(_, p)| p.color != color)
        .any(|(at, p)| is_legal_move(p, at, king, board))
}

/// True if `piece` on `from` can go to `to` without leaving its own king
/// attacked. The move is tried on a scratch copy of the board.
fn is_safe_move(piece: Piece, from: Coord, to: Coord, board: &Board) -> bool {
    if !is_legal_move(piece, from, to, board) {
        return false;
    }
    let mut scratch = board.clone();
    if scratch.move_piece(from, to).is_err() {
        return false;
    }
    !is_king_in_check(piece.color, &scratch)
}

/// True if `color` has at least one move that is legal and does not leave
/// its king in check.
pub fn has_any_legal_move(color: Color, board: &Board) -> bool {
    let found = board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(from, p)| Coord::all().any(|to| is_safe_move(p, from, to, board)));
    trace!(%color, found, "legal move search");
    found
}

/// Every fully legal move for `color`, in board order.
pub fn legal_moves(color: Color, board: &Board) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .flat_map(|(from, p)| {
            Coord::all()
                .filter(move |&to| is_safe_move(p, from, to, board))
                .map(move |to| Move { from, to })
        })
        .collect()
}

/// Destinations for the piece on `from`, for move hints.
/// An empty or off-board square yields nothing.
pub fn legal_targets(from: Coord, board: &Board) -> Vec<Coord> {
    match board.piece_at(from) {
        Ok(Some(piece)) => Coord::all()
            .filter(|&to| is_safe_move(piece, from, to, board))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn c(row: i8, col: i8) -> Coord {
        Coord::new(row, col)
    }

    fn board_with(pieces: &[(Coord, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for (at, color, kind) in pieces {
            board.place(*at, Piece::new(*color, *kind)).unwrap();
        }
        board
    }

    #[test]
    fn test_starting_position_not_in_check() {
        let board = Board::standard();
        assert!(!is_king_in_check(Color::White, &board));
        assert!(!is_king_in_check(Color::Black, &board));
        assert!(has_any_legal_move(Color::White, &board));
        // 16 pawn moves + 4 knight moves
        assert_eq!(legal_moves(Color::White, &board).len(), 20);
        assert_eq!(legal_moves(Color::Black, &board).len(), 20);
    }

    #[test]
    fn test_rook_on_open_file_gives_check() {
        let board = board_with(&[
            (c(7, 4), Color::White, PieceKind::King),
            (c(0, 4), Color::Black, PieceKind::Rook),
            (c(0, 0), Color::Black, PieceKind::King),
        ]);
        assert!(is_king_in_check(Color::White, &board));
        assert!(!is_king_in_check(Color::Black, &board));
    }

    #[test]
    fn test_blocked_attack_is_not_check() {
        let board = board_with(&[
            (c(7, 4), Color::White, PieceKind::King),
            (c(5, 4), Color::White, PieceKind::Bishop),
            (c(0, 4), Color::Black, PieceKind::Rook),
            (c(0, 0), Color::Black, PieceKind::King),
        ]);
        assert!(!is_king_in_check(Color::White, &board));
    }

    #[test]
    fn test_pawn_attacks_diagonally_not_forward() {
        let forward = board_with(&[
            (c(4, 4), Color::White, PieceKind::King),
            (c(3, 4), Color::Black, PieceKind::Pawn),
            (c(0, 0), Color::Black, PieceKind::King),
        ]);
        assert!(!is_king_in_check(Color::White, &forward));

        let diagonal = board_with(&[
            (c(4, 4), Color::White, PieceKind::King),
            (c(3, 3), Color::Black, PieceKind::Pawn),
            (c(0, 0), Color::Black, PieceKind::King),
        ]);
        assert!(is_king_in_check(Color::White, &diagonal));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = board_with(&[(c(0, 4), Color::Black, PieceKind::Rook)]);
        assert!(!is_king_in_check(Color::White, &board));
    }

    #[test]
    fn test_back_rank_mate_has_no_legal_move() {
        // black king boxed in by its own pawns, white rook on the back rank
        let board = board_with(&[
            (c(0, 6), Color::Black, PieceKind::King),
            (c(1, 5), Color::Black, PieceKind::Pawn),
            (c(1, 6), Color::Black, PieceKind::Pawn),
            (c(1, 7), Color::Black, PieceKind::Pawn),
            (c(0, 0), Color::White, PieceKind::Rook),
            (c(7, 6), Color::White, PieceKind::King),
        ]);
        assert!(is_king_in_check(Color::Black, &board));
        assert!(!has_any_legal_move(Color::Black, &board));
        assert!(legal_moves(Color::Black, &board).is_empty());
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        // same pattern, but h7 is free
        let board = board_with(&[
            (c(0, 6), Color::Black, PieceKind::King),
            (c(1, 5), Color::Black, PieceKind::Pawn),
            (c(1, 6), Color::Black, PieceKind::Pawn),
            (c(0, 0), Color::White, PieceKind::Rook),
            (c(7, 6), Color::White, PieceKind::King),
        ]);
        assert!(is_king_in_check(Color::Black, &board));
        assert!(has_any_legal_move(Color::Black, &board));
        assert_eq!(legal_targets(c(0, 6), &board), vec![c(1, 7)]);
    }

    #[test]
    fn test_pinned_piece_has_no_targets() {
        let board = board_with(&[
            (c(7, 4), Color::White, PieceKind::King),
            (c(6, 4), Color::White, PieceKind::Knight),
            (c(0, 4), Color::Black, PieceKind::Rook),
            (c(0, 0), Color::Black, PieceKind::King),
        ]);
        assert!(legal_targets(c(6, 4), &board).is_empty());
        assert!(!legal_targets(c(7, 4), &board).is_empty());
        assert!(legal_targets(c(3, 3), &board).is_empty());
        assert!(legal_targets(c(9, 9), &board).is_empty());
    }
}
