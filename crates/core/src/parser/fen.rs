//! FEN import/export
//!
//! Only piece placement and side to move carry information here. Castling
//! and en passant do not exist in these rules, so they are written as `-`
//! and ignored when reading, along with the move counters.

use crate::board::{Board, Color, Coord, Piece};
use crate::error::{Error, Result};
use crate::game::GameState;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

pub fn write_fen(state: &GameState) -> String {
    let turn = match state.turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {} - - 0 1", write_placement(&state.board), turn)
}

/// The placement field alone, row 0 (rank 8) first.
pub fn write_placement(board: &Board) -> String {
    let mut rows = Vec::with_capacity(8);
    for row in 0..8 {
        let mut text = String::new();
        let mut gap = 0;
        for col in 0..8 {
            match board.piece_at(Coord::new(row, col)).ok().flatten() {
                Some(piece) => {
                    if gap > 0 {
                        text.push_str(&gap.to_string());
                        gap = 0;
                    }
                    text.push(piece.fen_char());
                }
                None => gap += 1,
            }
        }
        if gap > 0 {
            text.push_str(&gap.to_string());
        }
        rows.push(text);
    }
    rows.join("/")
}

/// Reads a placement field and an optional side to move (default White).
pub fn parse_fen(text: &str) -> Result<GameState> {
    let mut fields = text.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| Error::Fen("empty FEN".to_string()))?;
    let board = parse_placement(placement)?;

    let turn = match fields.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(Error::Fen(format!("bad side to move '{}'", other))),
    };

    Ok(GameState { board, turn })
}

pub fn parse_placement(placement: &str) -> Result<Board> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(Error::Fen(format!("expected 8 rows, found {}", rows.len())));
    }

    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col: i8 = 0;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(Error::Fen(format!("bad gap '{}' in row {}", c, row)));
                }
                col += skip as i8;
            } else {
                let piece = Piece::from_fen_char(c)
                    .ok_or_else(|| Error::Fen(format!("unknown piece '{}'", c)))?;
                if col >= 8 {
                    return Err(Error::Fen(format!("row {} is too long", row)));
                }
                board.place(Coord::new(row as i8, col), piece)?;
                col += 1;
            }
            if col > 8 {
                return Err(Error::Fen(format!("row {} is too long", row)));
            }
        }
        if col != 8 {
            return Err(Error::Fen(format!("row {} has {} squares", row, col)));
        }
    }
    Ok(board)
}
