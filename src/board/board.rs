//! Square board of cell marks

use std::fmt;
use std::str::FromStr;

use super::{Mark, Variant};
use crate::error::BoardError;

/// Game board, cells in row-major order
///
/// The cell count is always `size * size`. Moves never edit a board in
/// place: [`Board::with_mark`] returns the successor board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Empty board of side `size`
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Empty board for a variant
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.size())
    }

    /// Build a board from existing cells
    pub fn from_cells(size: usize, cells: Vec<Mark>) -> Result<Self, BoardError> {
        let expected = size * size;
        if size == 0 || cells.len() != expected {
            return Err(BoardError::LengthMismatch {
                size,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Get mark at index
    ///
    /// Panics if `index` is off the board.
    #[inline]
    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    #[inline]
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index].is_empty()
    }

    /// All cells, row-major
    #[inline]
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Copy of this board with `mark` written at `index`
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut cells = self.cells.clone();
        cells[index] = mark;
        Board {
            size: self.size,
            cells,
        }
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Check if no cell holds a mark
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in chunk {
                write!(f, "{mark}")?;
            }
        }
        Ok(())
    }
}

/// Parses `XO./.X./..O` style layouts; whitespace and `/` are separators.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Mark::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let size = (1..=cells.len())
            .find(|n| n * n >= cells.len())
            .unwrap_or(0);
        if size * size != cells.len() || size == 0 {
            return Err(BoardError::NotSquare { len: cells.len() });
        }

        Self::from_cells(size, cells)
    }
}
