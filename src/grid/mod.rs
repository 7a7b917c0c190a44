//! Rectangular integer grids and the longest strictly-increasing path.
//!
//! A [`Grid`] is a validated rectangular matrix of `i64` values stored in
//! row-major order. Construction through [`Grid::from_rows`] is the only
//! way to obtain one, so every `Grid` in circulation has at least one row,
//! at least one column, and rows of identical length; the path search never
//! re-validates.
//!
//! [`longest_increasing_path`] returns the number of cells on the longest
//! path that moves between 4-adjacent cells (no diagonals) with strictly
//! increasing values at each step. A single cell is a path of length 1.
//! Because every edge goes from a smaller value to a strictly larger one,
//! the induced graph is acyclic by construction and the traversal needs no
//! visited set.
//!
//! The search is a memoized depth-first traversal driven by an explicit
//! frame stack rather than recursion, so the call-stack depth stays
//! constant no matter how large the grid is. The memo table makes the
//! total work O(rows × cols).
//!
//! # Examples
//!
//! ```rust
//! use seqgrid::grid::{Grid, longest_increasing_path};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![9, 9, 4],
//!     vec![6, 6, 8],
//!     vec![2, 1, 1],
//! ])?;
//! assert_eq!(longest_increasing_path(&grid), 4); // 1 -> 2 -> 6 -> 9
//! # Ok::<(), seqgrid::error::ComputeError>(())
//! ```

use smallvec::SmallVec;

use crate::error::ComputeError;

// =============================================================================
// Grid
// =============================================================================

/// A rectangular matrix of signed integers with `rows ≥ 1` and `cols ≥ 1`.
///
/// Stored row-major in a single buffer; cell `(row, col)` lives at index
/// `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<i64>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Builds a grid from a list of rows, validating shape up front.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::InvalidArgument`] if `rows` is empty, the
    /// first row is empty, or any row's length differs from the first's.
    /// Ragged input is rejected outright, never truncated or padded.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, ComputeError> {
        if rows.is_empty() {
            return Err(ComputeError::invalid_argument(
                "grid",
                "must contain at least one row",
            ));
        }

        let cols = rows[0].len();
        if cols == 0 {
            return Err(ComputeError::invalid_argument(
                "grid",
                "rows must contain at least one column",
            ));
        }

        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ComputeError::invalid_argument(
                    "grid",
                    format!("row {index} has {} columns, expected {cols}", row.len()),
                ));
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            rows: row_count,
            cols,
        })
    }

    /// Number of rows. Always at least 1.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns. Always at least 1.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Total cell count (`rows * cols`).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`: validated grids have at least one cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Value at a row-major cell index. Callers guarantee the index is in
    /// range.
    fn value(&self, cell: usize) -> i64 {
        self.cells[cell]
    }

    /// Row-major index of the 4-neighbor of `cell` in direction
    /// `(row_delta, col_delta)`, or `None` at the grid edge.
    fn step(&self, cell: usize, row_delta: isize, col_delta: isize) -> Option<usize> {
        let row = cell / self.cols;
        let col = cell % self.cols;
        let neighbor_row = row.checked_add_signed(row_delta)?;
        let neighbor_col = col.checked_add_signed(col_delta)?;
        if neighbor_row >= self.rows || neighbor_col >= self.cols {
            return None;
        }
        Some(neighbor_row * self.cols + neighbor_col)
    }
}

// =============================================================================
// Longest Increasing Path
// =============================================================================

/// The four cardinal directions (right, left, down, up).
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Memo sentinel: valid path lengths are at least 1, so 0 means
/// "not yet computed".
const UNCOMPUTED: u32 = 0;

/// One in-flight cell of the depth-first traversal.
struct Frame {
    /// Row-major index of the cell being expanded.
    cell: usize,
    /// Next entry of [`DIRECTIONS`] to examine.
    direction: usize,
    /// Best path length starting at `cell` found so far. Starts at 1 (the
    /// cell itself).
    best: u32,
}

/// Returns the length, in cells, of the longest strictly-increasing
/// 4-adjacent path in `grid`.
///
/// The result is at least 1 (grids are non-empty by construction) and fully
/// deterministic for a given grid: traversal order can differ between
/// implementations, but the returned length cannot.
#[must_use]
pub fn longest_increasing_path(grid: &Grid) -> usize {
    // Per-call memo of "longest path starting here", discarded on return.
    let mut memo = vec![UNCOMPUTED; grid.len()];
    let mut stack: SmallVec<[Frame; 64]> = SmallVec::new();
    let mut longest = 0;

    for start in 0..grid.len() {
        if memo[start] != UNCOMPUTED {
            longest = longest.max(memo[start]);
            continue;
        }

        stack.push(Frame {
            cell: start,
            direction: 0,
            best: 1,
        });

        // Cells on the stack always carry strictly increasing values, so
        // no cell can appear twice and the loop terminates.
        while let Some(frame) = stack.last_mut() {
            if frame.direction < DIRECTIONS.len() {
                let (row_delta, col_delta) = DIRECTIONS[frame.direction];
                frame.direction += 1;

                let Some(neighbor) = grid.step(frame.cell, row_delta, col_delta) else {
                    continue;
                };
                if grid.value(neighbor) <= grid.value(frame.cell) {
                    continue;
                }

                if memo[neighbor] == UNCOMPUTED {
                    stack.push(Frame {
                        cell: neighbor,
                        direction: 0,
                        best: 1,
                    });
                } else {
                    frame.best = frame.best.max(1 + memo[neighbor]);
                }
            } else {
                let finished = frame.best;
                memo[frame.cell] = finished;
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.best = parent.best.max(1 + finished);
                }
            }
        }

        longest = longest.max(memo[start]);
    }

    longest as usize
}
