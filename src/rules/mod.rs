//! Game rules
//!
//! - Win and draw detection over rows, columns and the two main diagonals
//! - Move validation (on the board, square empty) and application

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{apply, apply_move, validate, Move};
pub use win::{evaluate, winning_line, Line, Outcome, LINES};
