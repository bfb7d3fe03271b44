//! Game outcome

use crate::board::{Board, Mark};

use super::win::WinningLine;

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// Holds the winning mark, never `Mark::Empty`
    Won(Mark),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_finished(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Derive the status from a board and its winning line
///
/// A draw is a full board with no winning line.
pub fn outcome(board: &Board, winning_line: Option<&WinningLine>) -> GameStatus {
    match winning_line {
        Some(line) => GameStatus::Won(line.mark()),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
