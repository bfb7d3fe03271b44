//! Game rules
//!
//! - Win conditions (K in a row on an N x N board)
//! - Game outcome derived from the board

pub mod outcome;
pub mod win;

// Re-exports for convenient access
pub use outcome::{outcome, GameStatus};
pub use win::{check_winner, evaluate, would_win, Orientation, WinningLine};
