//! Status consistency invariant: the stored status matches the grid.

use super::Invariant;
use crate::rules;
use crate::GameSnapshot;

/// Invariant: the status equals what the terminal rules say about the grid.
///
/// `Won` iff a cell holds the winning tier; otherwise `Lost` iff the grid
/// is full with no mergeable pair; otherwise `Ongoing`.
pub struct StatusConsistentInvariant;

impl Invariant<GameSnapshot> for StatusConsistentInvariant {
    fn holds(state: &GameSnapshot) -> bool {
        rules::evaluate(state.grid()) == *state.status()
    }

    fn description() -> &'static str {
        "Status is consistent with the grid's terminal conditions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Status};
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_matching_status_holds() {
        let grid = Grid::from_rows(&[[1, 2], [2, 1]], 5).unwrap();
        let holding: Vec<Status> = Status::iter()
            .filter(|&s| StatusConsistentInvariant::holds(&GameSnapshot::new(grid.clone(), s, 0)))
            .collect();
        assert_eq!(holding, vec![Status::Lost]);
    }

    #[test]
    fn test_ongoing_with_pair_holds() {
        let grid = Grid::from_rows(&[[1, 1], [2, 3]], 5).unwrap();
        assert!(StatusConsistentInvariant::holds(&GameSnapshot::new(
            grid,
            Status::Ongoing,
            3
        )));
    }
}
