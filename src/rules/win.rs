//! Win detection for N x N boards
//!
//! A win is a run of `run_length` identical, non-empty marks along a row,
//! a column, or either diagonal. The scan order is fixed so that a board
//! holding several runs always reports the same one:
//!
//! 1. Horizontal: rows top to bottom, starts left to right
//! 2. Vertical: columns left to right, starts top to bottom
//! 3. Diagonal down-right: starts row by row, left to right
//! 4. Diagonal down-left: starts row by row, left to right

use std::ops::Range;

use tracing::trace;

use crate::board::{Board, Mark};

/// Line directions, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Orientation {
    #[display("horizontal")]
    Horizontal,
    #[display("vertical")]
    Vertical,
    #[display("diagonal down-right")]
    DiagonalDownRight,
    #[display("diagonal down-left")]
    DiagonalDownLeft,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];

    /// Step between consecutive cells as (row, col) deltas
    ///
    /// Every run is walked top to bottom, so the row delta is never
    /// negative; only the column can step backwards.
    #[inline]
    pub const fn step(self) -> (usize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }

    /// Start cells whose run stays on the board, in scan order
    fn starts(self, size: usize, run_length: usize) -> impl Iterator<Item = (usize, usize)> {
        let all = 0..size;
        let head: Range<usize> = 0..size - run_length + 1;
        let (rows, cols) = match self {
            Orientation::Horizontal => (all, head),
            Orientation::Vertical => (head, all),
            Orientation::DiagonalDownRight => (head.clone(), head),
            Orientation::DiagonalDownLeft => (head, run_length - 1..size),
        };

        let column_major = self == Orientation::Vertical;
        let (outer, inner) = if column_major { (cols, rows) } else { (rows, cols) };
        outer.flat_map(move |o| {
            inner
                .clone()
                .map(move |i| if column_major { (i, o) } else { (o, i) })
        })
    }
}

/// A completed run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WinningLine {
    mark: Mark,
    orientation: Orientation,
    cells: Vec<usize>,
}

impl WinningLine {
    /// Mark that owns the run
    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cell indices in run order
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Find the first winning run on a row-major board
///
/// Returns `None` when no run of `run_length` identical non-empty marks
/// exists.
///
/// # Panics
///
/// Panics if `cells` does not hold `size * size` marks or if `run_length`
/// is not in `1..=size`. Both are caller bugs.
pub fn evaluate(cells: &[Mark], size: usize, run_length: usize) -> Option<WinningLine> {
    assert_eq!(
        cells.len(),
        size * size,
        "board of size {size} must hold {} cells",
        size * size
    );
    assert!(
        (1..=size).contains(&run_length),
        "run length {run_length} invalid for board of size {size}"
    );

    Orientation::ALL.into_iter().find_map(|orientation| {
        let (dr, dc) = orientation.step();
        let index = |(row, col): (usize, usize), i: usize| {
            let r = row + dr * i;
            let c = col.wrapping_add_signed(dc * i as isize);
            r * size + c
        };

        orientation.starts(size, run_length).find_map(|start| {
            let first = cells[index(start, 0)];
            if first.is_empty() {
                return None;
            }
            if !(1..run_length).all(|i| cells[index(start, i)] == first) {
                return None;
            }

            let line = WinningLine {
                mark: first,
                orientation,
                cells: (0..run_length).map(|i| index(start, i)).collect(),
            };
            trace!(mark = %first, %orientation, cells = ?line.cells, "run found");
            Some(line)
        })
    })
}

/// [`evaluate`] over a [`Board`]
#[inline]
pub fn check_winner(board: &Board, run_length: usize) -> Option<WinningLine> {
    evaluate(board.cells(), board.size(), run_length)
}

/// Check whether placing `mark` at `index` would complete a run
///
/// Works on a copy; `board` is not modified. Occupied cells never win.
pub fn would_win(board: &Board, index: usize, mark: Mark, run_length: usize) -> bool {
    if mark.is_empty() || !board.is_empty_at(index) {
        return false;
    }
    let next = board.with_mark(index, mark);
    check_winner(&next, run_length).is_some_and(|line| line.contains(index))
}
