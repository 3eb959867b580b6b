//! Game state and move attempts

mod report;
mod state;

pub use report::{MoveReport, MoveStatus};
pub use state::GameState;
