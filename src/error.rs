//! Error types

use derive_more::{Display, Error};

/// Reasons a move is refused. The game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("cell {index} is already occupied")]
    Occupied { index: usize },

    #[display("game is over")]
    GameOver,
}

/// Errors building a board from external data
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("board of size {size} needs {expected} cells, got {actual}")]
    LengthMismatch {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[display("{len} cells do not form a square board")]
    NotSquare { len: usize },

    #[display("invalid mark {symbol:?}")]
    InvalidMark { symbol: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::Occupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::LengthMismatch {
            size: 3,
            expected: 9,
            actual: 8,
        };
        assert_eq!(err.to_string(), "board of size 3 needs 9 cells, got 8");
        assert_eq!(
            BoardError::InvalidMark { symbol: '#' }.to_string(),
            "invalid mark '#'"
        );
        assert_eq!(
            BoardError::NotSquare { len: 7 }.to_string(),
            "7 cells do not form a square board"
        );
    }
}
