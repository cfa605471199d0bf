//! Game rules for Just Get 10.
//!
//! Pure functions over a [`Grid`](crate::Grid): merge legality and
//! collapse, column gravity, and terminal detection. Rules are kept
//! apart from the state machine so contracts and tests can use them
//! directly.

pub mod gravity;
pub mod merge;
pub mod terminal;

pub use gravity::{apply_gravity, is_settled};
pub use merge::{MergeGroup, can_merge, has_any_merge, resolve_merge};
pub use terminal::{evaluate, is_lost, is_won};
