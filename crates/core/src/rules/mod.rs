//! Chess rules: movement patterns, check detection and move application

mod apply;
mod check;
mod movement;

pub use apply::{apply_move, detect_promotion, GameStatus, MoveOutcome};
pub use check::{has_any_legal_move, is_king_in_check, legal_moves, legal_targets, Move};
pub use movement::is_legal_move;
