//! Merge legality and connected-group collapse.

use super::super::{Coord, EngineError, Grid, Tier};
use super::super::types::EMPTY;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A collapsed connected group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeGroup {
    /// Clicked cell; it survives the collapse.
    pub origin: Coord,
    /// Tier shared by the whole group before the merge.
    pub tier: Tier,
    /// Number of cells in the group, origin included.
    pub size: usize,
}

/// Checks whether the cell at `at` can merge.
///
/// True iff the cell is non-empty and at least one in-bounds orthogonal
/// neighbor holds the same tier. Out-of-range coordinates never merge.
#[instrument(skip(grid))]
pub fn can_merge(grid: &Grid, at: Coord) -> bool {
    if grid.check(at).is_err() {
        return false;
    }
    let tier = grid.tier(at);
    tier != EMPTY && at.neighbors(grid.size()).any(|n| grid.tier(n) == tier)
}

/// Checks whether any cell on the grid can merge.
#[instrument(skip(grid))]
pub fn has_any_merge(grid: &Grid) -> bool {
    grid.coords().any(|at| can_merge(grid, at))
}

/// Collapses the connected group of equal tiers containing `at`.
///
/// Every cell of the group is cleared except the origin, which keeps its
/// pre-merge tier. The caller promotes the origin afterwards.
///
/// # Errors
///
/// [`EngineError::OutOfBounds`] for a bad coordinate and
/// [`EngineError::NotMergeable`] when [`can_merge`] is false.
#[instrument(skip(grid))]
pub fn resolve_merge(grid: &mut Grid, at: Coord) -> Result<MergeGroup, EngineError> {
    grid.check(at)?;
    if !can_merge(grid, at) {
        return Err(EngineError::NotMergeable(at));
    }

    let tier = grid.tier(at);
    let size = grid.size();
    let mut stack = vec![at];
    let mut cleared = 0;

    // A cleared cell reads EMPTY, which never equals `tier`, so each cell
    // is pushed-and-cleared at most once.
    grid.write(at, EMPTY);
    while let Some(cell) = stack.pop() {
        cleared += 1;
        for n in cell.neighbors(size) {
            if grid.tier(n) == tier {
                grid.write(n, EMPTY);
                stack.push(n);
            }
        }
    }
    grid.write(at, tier);

    debug!(%at, tier, group = cleared, "Collapsed merge group");
    Ok(MergeGroup {
        origin: at,
        tier,
        size: cleared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_empty(grid: &Grid) -> usize {
        grid.empty_cells().len()
    }

    #[test]
    fn test_empty_cell_never_merges() {
        let grid = Grid::from_rows(&[[0, 0], [0, 0]], 5).unwrap();
        assert!(!can_merge(&grid, Coord::new(0, 0)));
    }

    #[test]
    fn test_isolated_cell_cannot_merge() {
        let grid = Grid::from_rows(&[[1, 2], [2, 1]], 5).unwrap();
        assert!(!can_merge(&grid, Coord::new(0, 0)));
        assert!(!has_any_merge(&grid));
    }

    #[test]
    fn test_diagonal_does_not_count() {
        let grid = Grid::from_rows(&[[3, 1], [2, 3]], 5).unwrap();
        assert!(!can_merge(&grid, Coord::new(0, 0)));
    }

    #[test]
    fn test_out_of_bounds_cannot_merge() {
        let grid = Grid::from_rows(&[[1, 1], [1, 1]], 5).unwrap();
        assert!(!can_merge(&grid, Coord::new(2, 0)));
    }

    #[test]
    fn test_pair_merge() {
        let mut grid = Grid::from_rows(&[[2, 2], [1, 3]], 5).unwrap();
        let group = resolve_merge(&mut grid, Coord::new(0, 1)).unwrap();
        assert_eq!(group.size, 2);
        assert_eq!(group.tier, 2);
        assert_eq!(grid.rows(), vec![vec![0, 2], vec![1, 3]]);
    }

    #[test]
    fn test_component_collapses_through_chain() {
        // An L-shaped run of 1s reaches around the 2.
        let mut grid = Grid::from_rows(&[[1, 1, 1], [2, 2, 1], [1, 1, 1]], 5).unwrap();
        let group = resolve_merge(&mut grid, Coord::new(2, 0)).unwrap();
        assert_eq!(group.size, 7);
        assert_eq!(count_empty(&grid), 6);
        assert_eq!(grid.get(2, 0).unwrap(), 1);
        assert_eq!(grid.get(1, 0).unwrap(), 2);
    }

    #[test]
    fn test_merge_conservation() {
        let mut grid = Grid::from_rows(&[[4, 4, 4, 4], [4, 4, 4, 4], [4, 4, 4, 4], [4, 4, 4, 4]], 5)
            .unwrap();
        let group = resolve_merge(&mut grid, Coord::new(1, 2)).unwrap();
        assert_eq!(group.size, 16);
        assert_eq!(count_empty(&grid), 15);
        assert_eq!(grid.get(1, 2).unwrap(), 4);
    }

    #[test]
    fn test_other_tiers_untouched() {
        let mut grid = Grid::from_rows(&[[1, 1, 2], [3, 1, 0], [2, 2, 0]], 5).unwrap();
        resolve_merge(&mut grid, Coord::new(1, 1)).unwrap();
        assert_eq!(grid.rows(), vec![vec![0, 0, 2], vec![3, 1, 0], vec![2, 2, 0]]);
    }

    #[test]
    fn test_resolve_without_neighbor_fails() {
        let mut grid = Grid::from_rows(&[[1, 2], [3, 4]], 5).unwrap();
        let before = grid.clone();
        assert_eq!(
            resolve_merge(&mut grid, Coord::new(0, 0)),
            Err(EngineError::NotMergeable(Coord::new(0, 0)))
        );
        assert_eq!(grid, before);
    }
}
