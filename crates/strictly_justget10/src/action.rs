//! Turn outcomes reported back to the presentation layer.

use super::rules::MergeGroup;
use super::{Coord, Status, Tier};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What one click did.
///
/// A click that merged nothing leaves `merge` as `None` and every count at
/// zero; the grid and status are then unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The clicked coordinate.
    clicked: Coord,
    /// Collapsed group, if the click merged.
    merge: Option<MergeGroup>,
    /// Tier written to the surviving cell.
    promoted_to: Option<Tier>,
    /// Cells refilled after gravity.
    refilled: usize,
    /// Bonus tile placed after the refill.
    bonus: Option<(Coord, Tier)>,
    /// Status after the turn.
    status: Status,
}

impl TurnOutcome {
    /// Outcome of a click that changed nothing.
    pub fn no_op(clicked: Coord, status: Status) -> Self {
        Self {
            clicked,
            merge: None,
            promoted_to: None,
            refilled: 0,
            bonus: None,
            status,
        }
    }

    /// Outcome of a completed merge turn.
    pub(crate) fn merged(
        group: MergeGroup,
        promoted_to: Tier,
        refilled: usize,
        bonus: Option<(Coord, Tier)>,
        status: Status,
    ) -> Self {
        Self {
            clicked: group.origin,
            merge: Some(group),
            promoted_to: Some(promoted_to),
            refilled,
            bonus,
            status,
        }
    }

    /// Returns true if the click collapsed a group.
    pub fn did_merge(&self) -> bool {
        self.merge.is_some()
    }

    /// Surviving coordinate of the merge, if any.
    pub fn surviving(&self) -> Option<Coord> {
        self.merge.map(|g| g.origin)
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.merge, self.promoted_to) {
            (Some(group), Some(tier)) => write!(
                f,
                "Merged {} x{} at {} into {} ({})",
                group.tier, group.size, group.origin, tier, self.status
            ),
            _ => write!(f, "Nothing to merge at {} ({})", self.clicked, self.status),
        }
    }
}
