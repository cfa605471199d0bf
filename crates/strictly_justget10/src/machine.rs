//! Turn orchestration and terminal-state tracking.

use super::action::TurnOutcome;
use super::config::GameConfig;
use super::spawner::Spawner;
use super::{Coord, EngineError, Grid, Status, rules};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Drives turns on a grid it is handed and tracks the game status.
///
/// The machine owns the random source; the grid belongs to the
/// [`GameSession`](crate::GameSession) that composes the two.
#[derive(Debug, Clone)]
pub struct GameStateMachine<R: Rng = StdRng> {
    config: GameConfig,
    spawner: Spawner,
    rng: R,
    status: Status,
}

impl<R: Rng> GameStateMachine<R> {
    /// Creates a machine in the `Ongoing` state.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if `config` does not validate.
    #[instrument(skip(rng))]
    pub fn new(config: GameConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        let spawner = Spawner::new(config.tier_distribution())?;
        Ok(Self {
            config,
            spawner,
            rng,
            status: Status::Ongoing,
        })
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The configuration the machine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Builds a fresh grid seeded with the configured number of tiles.
    ///
    /// Resets the status and evaluates the seeded grid immediately.
    #[instrument(skip(self))]
    pub fn new_grid(&mut self) -> Result<Grid, EngineError> {
        let mut grid = Grid::new(*self.config.size(), *self.config.winning_tier())?;
        let mut placed = 0;
        for _ in 0..*self.config.initial_tile_count() {
            if self.spawner.spawn_one(&mut grid, &mut self.rng)?.is_some() {
                placed += 1;
            }
        }
        self.status = rules::evaluate(&grid);
        info!(placed, status = %self.status, "Seeded new grid");
        Ok(grid)
    }

    /// Plays one click on `grid`.
    ///
    /// A click on an empty cell or a cell with no equal neighbor is a no-op.
    /// Otherwise the group collapses, the survivor is promoted, columns
    /// settle, every hole is refilled, one bonus tile is spawned, and the
    /// status is re-evaluated.
    ///
    /// # Errors
    ///
    /// [`EngineError::GameOver`] once the status is terminal and
    /// [`EngineError::OutOfBounds`] for a bad coordinate. Neither touches the grid.
    #[instrument(skip(self, grid), fields(status = %self.status))]
    pub fn turn(&mut self, grid: &mut Grid, at: Coord) -> Result<TurnOutcome, EngineError> {
        if self.status.is_terminal() {
            warn!("Click rejected: game over");
            return Err(EngineError::GameOver(self.status));
        }
        grid.check(at)?;

        if !rules::can_merge(grid, at) {
            debug!("Click is a no-op");
            return Ok(TurnOutcome::no_op(at, self.status));
        }

        let group = rules::resolve_merge(grid, at)?;
        let promoted = group.tier.saturating_add(1).min(grid.max_tier());
        grid.put(at, promoted)?;
        rules::apply_gravity(grid);
        let refilled = self.spawner.fill_all(grid, &mut self.rng)?;
        let bonus = self.spawner.spawn_one(grid, &mut self.rng)?;

        self.status = rules::evaluate(grid);
        if self.status.is_terminal() {
            info!(status = %self.status, "Game finished");
        }
        debug!(tier = group.tier, size = group.size, promoted, refilled, "Turn complete");

        Ok(TurnOutcome::merged(group, promoted, refilled, bonus, self.status))
    }

    /// Re-evaluates the status of `grid` without playing a turn.
    pub fn refresh(&mut self, grid: &Grid) -> Status {
        self.status = rules::evaluate(grid);
        self.status
    }
}
