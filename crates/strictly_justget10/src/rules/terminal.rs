//! Win and loss detection.

use super::super::{Grid, Status};
use super::merge::has_any_merge;
use tracing::instrument;

/// Checks if any cell has reached the winning tier.
#[instrument(skip(grid))]
pub fn is_won(grid: &Grid) -> bool {
    grid.contains(grid.max_tier())
}

/// Checks if the grid is full and no cell anywhere can merge.
///
/// The whole grid is scanned; a single mergeable pair keeps the game alive.
#[instrument(skip(grid))]
pub fn is_lost(grid: &Grid) -> bool {
    grid.is_full() && !has_any_merge(grid)
}

/// Evaluates terminal conditions. A win takes precedence over a loss.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid) -> Status {
    if is_won(grid) {
        Status::Won
    } else if is_lost(grid) {
        Status::Lost
    } else {
        Status::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_tier_wins() {
        let grid = Grid::from_rows(&[[0, 5], [1, 2]], 5).unwrap();
        assert!(is_won(&grid));
        assert_eq!(evaluate(&grid), Status::Won);
    }

    #[test]
    fn test_full_grid_without_pairs_loses() {
        let grid = Grid::from_rows(&[[1, 2, 1], [2, 1, 2], [1, 2, 1]], 5).unwrap();
        assert!(is_lost(&grid));
        assert_eq!(evaluate(&grid), Status::Lost);
    }

    #[test]
    fn test_pair_in_last_row_keeps_game_alive() {
        let grid = Grid::from_rows(&[[1, 2, 1], [2, 1, 2], [3, 3, 1]], 5).unwrap();
        assert!(!is_lost(&grid));
        assert_eq!(evaluate(&grid), Status::Ongoing);
    }

    #[test]
    fn test_grid_with_hole_not_lost() {
        let grid = Grid::from_rows(&[[1, 2], [2, 0]], 5).unwrap();
        assert!(!is_lost(&grid));
    }

    #[test]
    fn test_win_beats_loss() {
        let grid = Grid::from_rows(&[[5, 2], [2, 1]], 5).unwrap();
        assert_eq!(evaluate(&grid), Status::Won);
    }
}
