//! Column compaction after a merge.

use super::super::types::EMPTY;
use super::super::{Coord, Grid};
use tracing::{debug, instrument};

/// Lets every column settle toward the highest row index.
///
/// Non-empty cells keep their relative order; empties collect at the top.
/// Returns how many cells moved.
#[instrument(skip(grid))]
pub fn apply_gravity(grid: &mut Grid) -> usize {
    let moved: usize = (0..grid.size()).map(|col| settle_column(grid, col)).sum();
    debug!(moved, "Applied gravity");
    moved
}

/// Settles one column by sliding each falling tile down as far as it goes,
/// scanning bottom-up from the second-to-last row.
fn settle_column(grid: &mut Grid, col: usize) -> usize {
    let size = grid.size();
    let mut moved = 0;
    for row in (0..size.saturating_sub(1)).rev() {
        let tier = grid.tier(Coord::new(row, col));
        if tier == EMPTY {
            continue;
        }
        let mut current = row;
        while current + 1 < size && grid.tier(Coord::new(current + 1, col)) == EMPTY {
            grid.write(Coord::new(current + 1, col), tier);
            grid.write(Coord::new(current, col), EMPTY);
            current += 1;
        }
        if current != row {
            moved += 1;
        }
    }
    moved
}

/// Checks that every column is settled: no empty cell sits below a tile.
pub fn is_settled(grid: &Grid) -> bool {
    let size = grid.size();
    (0..size).all(|col| {
        (0..size.saturating_sub(1)).all(|row| {
            grid.tier(Coord::new(row, col)) == EMPTY
                || grid.tier(Coord::new(row + 1, col)) != EMPTY
        })
    })
}
