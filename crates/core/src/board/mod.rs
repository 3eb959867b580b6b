//! Board representation

mod grid;
mod types;

pub use grid::Board;
pub use types::*;
