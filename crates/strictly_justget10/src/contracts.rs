//! Contract-based validation for clicks.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, click)} turn {Q(before, after)}.

use super::invariants::{GameInvariants, InvariantSet};
use super::{Coord, EngineError, GameSnapshot};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Click Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the click lies inside the grid.
pub struct ClickInBounds;

impl ClickInBounds {
    /// Fails with [`EngineError::OutOfBounds`] outside `[0, N)`.
    #[instrument(skip(state))]
    pub fn check(at: &Coord, state: &GameSnapshot) -> Result<(), EngineError> {
        state.grid().check(*at)
    }
}

/// Precondition: the game still accepts clicks.
pub struct GameOngoing;

impl GameOngoing {
    /// Fails with [`EngineError::GameOver`] once the status is terminal.
    #[instrument(skip(state))]
    pub fn check(state: &GameSnapshot) -> Result<(), EngineError> {
        if state.status().is_terminal() {
            Err(EngineError::GameOver(*state.status()))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Click Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a click that did not count as a turn changed nothing.
pub struct NoOpLeavesGrid;

impl NoOpLeavesGrid {
    /// Holds when the turn counter moved or the grid is identical.
    pub fn holds(before: &GameSnapshot, after: &GameSnapshot) -> bool {
        after.turns() != before.turns()
            || (after.grid() == before.grid() && after.status() == before.status())
    }
}

/// Postcondition: a merge turn leaves no empty cell behind.
pub struct MergeRefillsGrid;

impl MergeRefillsGrid {
    /// Holds when the turn counter did not move or the grid is full.
    pub fn holds(before: &GameSnapshot, after: &GameSnapshot) -> bool {
        after.turns() == before.turns() || after.grid().is_full()
    }
}

// ─────────────────────────────────────────────────────────────
//  Click Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for click actions.
///
/// Preconditions:
/// - Coordinate inside the grid
/// - Game not over
///
/// Postconditions:
/// - Game invariants hold
/// - No-op clicks leave the grid untouched
/// - Merge turns refill every hole
pub struct ClickContract;

impl Contract<GameSnapshot, Coord> for ClickContract {
    fn pre(state: &GameSnapshot, action: &Coord) -> Result<(), EngineError> {
        GameOngoing::check(state)?;
        ClickInBounds::check(action, state)
    }

    fn post(before: &GameSnapshot, after: &GameSnapshot) -> Result<(), EngineError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !NoOpLeavesGrid::holds(before, after) {
            warn!("No-op click modified the grid");
            return Err(EngineError::InvariantViolation(
                "No-op click modified the grid".to_string(),
            ));
        }

        if !MergeRefillsGrid::holds(before, after) {
            warn!("Merge turn left empty cells");
            return Err(EngineError::InvariantViolation(
                "Merge turn left empty cells".to_string(),
            ));
        }

        Ok(())
    }
}
