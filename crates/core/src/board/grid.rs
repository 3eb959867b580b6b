//! The 8x8 board

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Color, Coord, Piece, PieceKind};
use crate::error::Result;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square contents in row-major order. Holds no rule knowledge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting placement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = color.back_row() as usize;
            let pawns = color.pawn_home_row() as usize;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back][col] = Some(Piece::new(color, *kind));
                board.squares[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    pub fn piece_at(&self, at: Coord) -> Result<Option<Piece>> {
        at.index()?;
        Ok(self.squares[at.row as usize][at.col as usize])
    }

    pub fn is_empty(&self, at: Coord) -> Result<bool> {
        Ok(self.piece_at(at)?.is_none())
    }

    /// Puts `piece` on `at`, replacing any occupant.
    pub fn place(&mut self, at: Coord, piece: Piece) -> Result<()> {
        *self.slot_mut(at)? = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, at: Coord) -> Result<Option<Piece>> {
        Ok(self.slot_mut(at)?.take())
    }

    /// Relocates whatever stands on `from` to `to` and returns the previous
    /// occupant of `to`. Both squares are validated before anything changes.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>> {
        from.index()?;
        to.index()?;
        let moving = self.remove(from)?;
        let previous = std::mem::replace(self.slot_mut(to)?, moving);
        Ok(previous)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |at| {
            self.squares[at.row as usize][at.col as usize].map(|piece| (at, piece))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn find_king(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(at, _)| at)
    }

    fn slot_mut(&mut self, at: Coord) -> Result<&mut Option<Piece>> {
        at.index()?;
        Ok(&mut self.squares[at.row as usize][at.col as usize])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// One line per row, row 0 first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.squares.iter().enumerate() {
            let line: String = squares
                .iter()
                .map(|sq| sq.map_or('.', |p| p.fen_char()))
                .collect();
            writeln!(f, "{} {}", 8 - row, line)?;
        }
        write!(f, "  abcdefgh")
    }
}
