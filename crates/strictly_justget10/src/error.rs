//! Error types for the merge-puzzle engine.

use super::coord::Coord;
use super::status::Status;
use super::types::Tier;

/// Error that can occur when reading, writing, or playing on a grid.
///
/// Every variant is a precondition violation surfaced to the caller.
/// Clicks that simply do nothing (empty cell, no equal neighbor) are
/// not errors; they come back as an unmerged [`TurnOutcome`](crate::TurnOutcome).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A coordinate lies outside the grid.
    #[display("Coordinate {} is outside a {}x{} grid", coord, size, size)]
    OutOfBounds {
        /// The rejected coordinate.
        coord: Coord,
        /// Grid dimension.
        size: usize,
    },

    /// A tier outside `0..=max` was written to the grid.
    #[display("Tier {} is outside 0..={}", tier, max)]
    InvalidTier {
        /// The rejected tier.
        tier: Tier,
        /// The winning tier of the grid.
        max: Tier,
    },

    /// The game configuration is unusable.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// A merge was requested at a cell with no equal neighbor.
    #[display("Cell {} has no equal-valued neighbor to merge with", _0)]
    NotMergeable(Coord),

    /// The game already reached a terminal status.
    #[display("Game is already over ({})", _0)]
    GameOver(Status),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
