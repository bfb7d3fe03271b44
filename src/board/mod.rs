//! Board representation for the grid games

pub mod board;


// Re-exports
pub use board::Board;

use crate::error::BoardError;

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Mark {
    #[default]
    #[display(".")]
    Empty,
    /// First player
    #[display("X")]
    X,
    /// Second player
    #[display("O")]
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Symbol drawn in a cell, `None` for empty cells
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Mark::X => Some("X"),
            Mark::O => Some("O"),
            Mark::Empty => None,
        }
    }
}

impl TryFrom<char> for Mark {
    type Error = BoardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '.' | '-' | '_' => Ok(Mark::Empty),
            _ => Err(BoardError::InvalidMark { symbol }),
        }
    }
}

/// The two supported board configurations
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    derive_more::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
pub enum Variant {
    /// 3x3 board, three in a row
    #[default]
    #[display("Tic-Tac-Toe")]
    Classic,
    /// 5x5 board, five in a row
    #[display("Connect Five")]
    ConnectFive,
}

impl Variant {
    /// Board side length
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Variant::Classic => 3,
            Variant::ConnectFive => 5,
        }
    }

    /// Marks in a row needed to win
    #[inline]
    pub const fn run_length(self) -> usize {
        match self {
            Variant::Classic => 3,
            Variant::ConnectFive => 5,
        }
    }

    #[inline]
    pub const fn cell_count(self) -> usize {
        self.size() * self.size()
    }
}

/// Position on a board of a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        debug_assert!(self.row < size && self.col < size);
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }
}
