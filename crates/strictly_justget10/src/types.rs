//! Core scalar types and reference constants.

/// Level of a tile. `0` is an empty cell.
pub type Tier = u8;

/// Tier value of an empty cell.
pub const EMPTY: Tier = 0;

/// Reference grid dimension.
pub const DEFAULT_SIZE: usize = 5;

/// Reference winning tier.
pub const DEFAULT_WINNING_TIER: Tier = 10;

/// Reference number of tiles seeded at session start.
pub const DEFAULT_INITIAL_TILES: usize = 25;
