//! Strictly Just Get 10 - pure merge-puzzle logic
//!
//! The player clicks a tile; if it touches an equal tile, the whole
//! connected group collapses into the clicked cell, which goes up one
//! tier. Columns then fall, holes refill with random tiles, and one bonus
//! tile drops in. Reaching the winning tier wins; a full grid with no
//! equal neighbors loses.
//!
//! # Architecture
//!
//! - **Grid**: NxN tier matrix with bounds-checked access
//! - **Spawner**: weighted-random tile placement
//! - **Rules**: merge resolution, gravity, terminal detection
//! - **GameStateMachine**: one turn at a time, tracks the status
//! - **GameSession**: grid + machine, restartable
//!
//! # Example
//!
//! ```
//! use strictly_justget10::{GameConfig, GameSession, Status};
//!
//! # fn example() -> Result<(), strictly_justget10::EngineError> {
//! let mut session = GameSession::seeded(GameConfig::default(), 42)?;
//! let outcome = session.on_click(2, 3)?;
//! assert!(outcome.did_merge() || session.status() == Status::Ongoing);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod coord;
mod error;
mod grid;
mod machine;
mod session;
mod spawner;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::TurnOutcome;
pub use config::{GameConfig, TierDistribution, TierWeight};
pub use coord::{Coord, Direction};
pub use error::EngineError;
pub use grid::Grid;
pub use machine::GameStateMachine;
pub use rules::MergeGroup;
pub use session::{GameSession, GameSnapshot};
pub use spawner::Spawner;
pub use status::Status;
pub use types::{DEFAULT_INITIAL_TILES, DEFAULT_SIZE, DEFAULT_WINNING_TIER, EMPTY, Tier};
