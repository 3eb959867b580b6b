//! Position notation

pub mod fen;

pub use fen::{parse_fen, write_fen};
