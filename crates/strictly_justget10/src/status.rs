//! Game status for the turn state machine.

use serde::{Deserialize, Serialize};

/// Current status of a game.
///
/// `Won` and `Lost` are terminal: no further turns are accepted until
/// the session is restarted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Status {
    /// Game accepts clicks.
    #[default]
    Ongoing,
    /// A tile reached the winning tier.
    Won,
    /// The grid is full and no cell can merge.
    Lost,
}

impl Status {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }
}
