//! Property-based tests for longest increasing path search.
//!
//! Verifies with proptest:
//! - The result always lies within `[1, rows * cols]`
//! - The result is deterministic across calls
//! - Transposing the grid does not change the result (4-adjacency and
//!   strict ordering are both preserved by transposition)
//! - A strictly increasing single row is traversed end to end

use proptest::prelude::*;
use seqgrid::grid::{Grid, longest_increasing_path};

/// Strategy for rectangular grids: dimensions 1..=8, arbitrary cell values.
fn rectangular_rows() -> impl Strategy<Value = Vec<Vec<i64>>> {
    (1_usize..=8, 1_usize..=8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(any::<i64>(), cols), rows)
    })
}

fn transpose(rows: &[Vec<i64>]) -> Vec<Vec<i64>> {
    let cols = rows[0].len();
    (0..cols)
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect()
}

proptest! {
    /// Range law: a path has at least one cell and at most all of them.
    #[test]
    fn prop_result_is_within_the_cell_count(rows in rectangular_rows()) {
        let cell_count = rows.len() * rows[0].len();
        let grid = Grid::from_rows(rows).unwrap();

        let length = longest_increasing_path(&grid);
        prop_assert!(length >= 1);
        prop_assert!(length <= cell_count);
    }

    /// Determinism law: the same grid always yields the same length.
    #[test]
    fn prop_result_is_deterministic(rows in rectangular_rows()) {
        let grid = Grid::from_rows(rows).unwrap();
        let first = longest_increasing_path(&grid);
        prop_assert_eq!(longest_increasing_path(&grid), first);
    }

    /// Transposition law: flipping rows and columns preserves adjacency and
    /// ordering, so the longest path length is unchanged.
    #[test]
    fn prop_transposition_preserves_the_result(rows in rectangular_rows()) {
        let transposed = Grid::from_rows(transpose(&rows)).unwrap();
        let grid = Grid::from_rows(rows).unwrap();

        prop_assert_eq!(
            longest_increasing_path(&grid),
            longest_increasing_path(&transposed)
        );
    }

    /// A strictly increasing row is one long path.
    #[test]
    fn prop_strictly_increasing_row_spans_every_cell(length in 1_usize..64) {
        let row: Vec<i64> = (0..length).map(|value| value as i64).collect();
        let grid = Grid::from_rows(vec![row]).unwrap();
        prop_assert_eq!(longest_increasing_path(&grid), length);
    }
}
