//! Tier range invariant: every cell is empty or a valid tier.

use super::Invariant;
use crate::GameSnapshot;

/// Invariant: every cell holds a tier in `0..=winning_tier`.
pub struct TierRangeInvariant;

impl Invariant<GameSnapshot> for TierRangeInvariant {
    fn holds(state: &GameSnapshot) -> bool {
        let max = state.grid().max_tier();
        state.grid().cells().iter().all(|&t| t <= max)
    }

    fn description() -> &'static str {
        "Every cell holds a tier between 0 and the winning tier"
    }
}
