//! Game state and the move-attempt entry point

use serde::{Deserialize, Serialize};
use tracing::info;

use super::report::MoveReport;
use crate::board::{Board, Color, Coord, PieceKind};
use crate::error::Result;
use crate::parser::fen;
use crate::rules::{self, Move};

/// Board plus side to move. The only mutable state in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            turn: Color::White,
        }
    }

    /// Throws away the current game and starts over.
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("game restarted");
    }

    /// Tries a move for the side to move and reports the result.
    ///
    /// Rejected attempts leave the state untouched.
    pub fn attempt_move(
        &mut self,
        from: Coord,
        to: Coord,
        promotion: Option<PieceKind>,
    ) -> MoveReport {
        match rules::apply_move(self, from, to, promotion) {
            Ok(outcome) => MoveReport::accepted(&outcome),
            Err(e) => MoveReport::rejected(&e, self.turn),
        }
    }

    pub fn is_check(&self) -> bool {
        rules::is_king_in_check(self.turn, &self.board)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !rules::has_any_legal_move(self.turn, &self.board)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(self.turn, &self.board)
    }

    /// Move hints for the piece on `from`. Pieces of the side not to move
    /// get none.
    pub fn legal_targets(&self, from: Coord) -> Vec<Coord> {
        match self.board.piece_at(from) {
            Ok(Some(p)) if p.color == self.turn => rules::legal_targets(from, &self.board),
            _ => Vec::new(),
        }
    }

    pub fn to_fen(&self) -> String {
        fen::write_fen(self)
    }

    pub fn from_fen(text: &str) -> Result<Self> {
        fen::parse_fen(text)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use crate::game::MoveStatus;

    fn sq(name: &str) -> Coord {
        name.parse().unwrap()
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.turn, Color::White);
        assert_eq!(state.board, Board::standard());
        assert!(!state.is_check());
        assert_eq!(state.legal_moves().len(), 20);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::new();
        let moves = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")];
        let mut expected = Color::White;
        for (from, to) in moves {
            assert_eq!(state.turn, expected);
            let report = state.attempt_move(sq(from), sq(to), None);
            assert!(report.accepted);
            assert_eq!(report.status, MoveStatus::Normal);
            expected = expected.opposite();
            assert_eq!(report.turn, expected);
        }
    }

    #[test]
    fn test_rejected_attempts_keep_turn() {
        let mut state = GameState::new();

        let report = state.attempt_move(sq("e7"), sq("e5"), None);
        assert!(!report.accepted);
        assert_eq!(report.status, MoveStatus::NoPieceOrWrongTurn);
        assert_eq!(report.turn, Color::White);

        let report = state.attempt_move(sq("e2"), sq("e5"), None);
        assert_eq!(report.status, MoveStatus::IllegalMove);
        assert!(report.status.is_rejection());

        let report = state.attempt_move(sq("e2"), Coord::new(-1, 4), None);
        assert_eq!(report.status, MoveStatus::OutOfBounds);

        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_self_check_report() {
        let mut state = GameState::from_fen("k3r3/8/8/8/8/8/4B3/4K3 w").unwrap();
        let before = state.clone();
        let report = state.attempt_move(sq("e2"), sq("d3"), None);
        assert!(!report.accepted);
        assert_eq!(report.status, MoveStatus::SelfCheck);
        assert_eq!(report.captured, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_back_rank_mate_report() {
        let mut state = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w").unwrap();
        let report = state.attempt_move(sq("a1"), sq("a8"), None);
        assert!(report.accepted);
        assert_eq!(report.status, MoveStatus::Checkmate { winner: Color::White });
        assert_eq!(report.turn, Color::Black);
        assert!(state.is_checkmate());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_capture_and_promotion_report() {
        let mut state = GameState::from_fen("1n5k/P7/8/8/8/8/8/4K3 w").unwrap();
        let report = state.attempt_move(sq("a7"), sq("b8"), Some(PieceKind::Rook));
        assert!(report.accepted);
        assert_eq!(report.captured, Some(Piece::new(Color::Black, PieceKind::Knight)));
        // the new rook attacks h8 along the back rank
        assert_eq!(report.status, MoveStatus::Check);
        assert_eq!(
            state.board.piece_at(sq("b8")).unwrap(),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn test_restart_is_new_game() {
        let mut state = GameState::new();
        state.attempt_move(sq("e2"), sq("e4"), None);
        state.attempt_move(sq("d7"), sq("d5"), None);
        state.attempt_move(sq("e4"), sq("d5"), None);
        assert_ne!(state, GameState::new());

        state.restart();
        assert_eq!(state, GameState::new());
        state.restart();
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_legal_targets_respect_turn() {
        let state = GameState::new();
        assert_eq!(state.legal_targets(sq("g1")), vec![sq("f3"), sq("h3")]);
        assert!(state.legal_targets(sq("g8")).is_empty());
        assert!(state.legal_targets(sq("e4")).is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut state = GameState::new();
        state.attempt_move(sq("e2"), sq("e4"), None);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        let report = state.attempt_move(sq("e7"), sq("e5"), None);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["status"], "normal");
        assert_eq!(json["turn"], "white");
    }
}
