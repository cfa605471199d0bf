//! Game sessions: one grid plus the machine that plays on it.

use super::action::TurnOutcome;
use super::config::GameConfig;
#[cfg(debug_assertions)]
use super::contracts::{ClickContract, Contract};
use super::machine::GameStateMachine;
use super::{Coord, EngineError, Grid, Status, Tier};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Read-only view of a session between turns.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Copy of the grid.
    grid: Grid,
    /// Status after the last turn.
    status: Status,
    /// Merge turns played since the session (re)started.
    turns: u32,
}

impl GameSnapshot {
    /// Creates a snapshot.
    pub fn new(grid: Grid, status: Status, turns: u32) -> Self {
        Self {
            grid,
            status,
            turns,
        }
    }

    /// Grid rows, top row first.
    pub fn rows(&self) -> Vec<Vec<Tier>> {
        self.grid.rows()
    }
}

/// A single game: the grid and the state machine that owns its turns.
///
/// Restarting replaces the grid; the random source carries over so a
/// seeded session replays identically across restarts.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = StdRng> {
    grid: Grid,
    machine: GameStateMachine<R>,
    turns: u32,
}

impl GameSession<StdRng> {
    /// Starts a session with an entropy-seeded generator.
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Starts a reproducible session from a seed.
    #[instrument]
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a session with a caller-supplied random source.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if `config` does not validate.
    #[instrument(skip(rng))]
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        let mut machine = GameStateMachine::new(config, rng)?;
        let grid = machine.new_grid()?;
        info!(size = grid.size(), status = %machine.status(), "Session started");
        Ok(Self {
            grid,
            machine,
            turns: 0,
        })
    }

    /// Starts a session on an explicit grid, for fixtures and replays.
    ///
    /// The status is evaluated from the grid.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if the grid does not match the
    /// configured size or winning tier.
    #[instrument(skip(grid, rng))]
    pub fn from_grid(config: GameConfig, grid: Grid, rng: R) -> Result<Self, EngineError> {
        if grid.size() != *config.size() || grid.max_tier() != *config.winning_tier() {
            return Err(EngineError::InvalidConfiguration(format!(
                "grid is {}x{} with winning tier {}, config expects {}x{} with {}",
                grid.size(),
                grid.size(),
                grid.max_tier(),
                config.size(),
                config.size(),
                config.winning_tier()
            )));
        }
        let mut machine = GameStateMachine::new(config, rng)?;
        machine.refresh(&grid);
        Ok(Self {
            grid,
            machine,
            turns: 0,
        })
    }

    /// Forwards a click at `(row, col)`.
    pub fn on_click(&mut self, row: usize, col: usize) -> Result<TurnOutcome, EngineError> {
        self.click(Coord::new(row, col))
    }

    /// Plays one click.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfBounds`] outside the grid and
    /// [`EngineError::GameOver`] after a win or loss. Postconditions are
    /// verified in debug builds and surface as
    /// [`EngineError::InvariantViolation`].
    #[instrument(skip(self), fields(turns = self.turns))]
    pub fn click(&mut self, at: Coord) -> Result<TurnOutcome, EngineError> {
        #[cfg(debug_assertions)]
        let before = self.current_state();
        #[cfg(debug_assertions)]
        ClickContract::pre(&before, &at)?;

        let outcome = self.machine.turn(&mut self.grid, at)?;
        if outcome.did_merge() {
            self.turns += 1;
        }
        debug!(%outcome, "Click resolved");

        #[cfg(debug_assertions)]
        ClickContract::post(&before, &self.current_state())?;

        Ok(outcome)
    }

    /// Copies out the grid and status.
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot::new(self.grid.clone(), self.machine.status(), self.turns)
    }

    /// Discards the grid and starts over with a freshly seeded one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.grid = self.machine.new_grid()?;
        self.turns = 0;
        info!(status = %self.machine.status(), "Session restarted");
        Ok(())
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current status.
    pub fn status(&self) -> Status {
        self.machine.status()
    }

    /// Merge turns played since the last (re)start.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        self.machine.config()
    }
}
