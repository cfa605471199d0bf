//! Weighted-random tile spawning.

use super::config::TierDistribution;
use super::coord::Coord;
use super::error::EngineError;
use super::grid::Grid;
use super::types::{EMPTY, Tier};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::{debug, instrument};

/// Draws new tiles from a [`TierDistribution`] and places them on a grid.
///
/// The spawner holds no entropy of its own; every operation takes the
/// random source as an argument so tests can pass a seeded generator.
#[derive(Debug, Clone)]
pub struct Spawner {
    tiers: Vec<Tier>,
    index: WeightedIndex<f64>,
}

impl Spawner {
    /// Builds a spawner. Weights are normalised to relative probabilities.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] if the distribution is empty or
    /// has a non-positive weight.
    #[instrument]
    pub fn new(distribution: &TierDistribution) -> Result<Self, EngineError> {
        let entries = distribution.entries();
        if let Some(bad) = entries.iter().find(|e| e.tier == EMPTY) {
            return Err(EngineError::InvalidConfiguration(format!(
                "spawn tier {} is the empty tier",
                bad.tier
            )));
        }
        if let Some(bad) = entries.iter().find(|e| !(e.weight.is_finite() && e.weight > 0.0)) {
            return Err(EngineError::InvalidConfiguration(format!(
                "weight {} for tier {} must be positive",
                bad.weight, bad.tier
            )));
        }
        let index = WeightedIndex::new(entries.iter().map(|e| e.weight))
            .map_err(|e| EngineError::InvalidConfiguration(format!("tier weights: {}", e)))?;
        Ok(Self {
            tiers: entries.iter().map(|e| e.tier).collect(),
            index,
        })
    }

    /// Draws one tier. Never returns the empty tier.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Tier {
        self.tiers[self.index.sample(rng)]
    }

    /// Places one tile in a uniformly chosen empty cell.
    ///
    /// Returns the placement, or `None` (without touching the grid or the
    /// random source) when the grid is full.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTier`] if the drawn tier exceeds the grid's
    /// winning tier. The grid is left unchanged.
    #[instrument(skip(self, grid, rng))]
    pub fn spawn_one<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<Option<(Coord, Tier)>, EngineError> {
        let empty = grid.empty_cells();
        if empty.is_empty() {
            debug!("No empty cell to spawn into");
            return Ok(None);
        }
        let at = empty[rng.gen_range(0..empty.len())];
        let tier = self.draw(rng);
        grid.put(at, tier)?;
        debug!(%at, tier, "Spawned tile");
        Ok(Some((at, tier)))
    }

    /// Fills every empty cell.
    ///
    /// Columns are visited left to right; inside a column, empty rows are
    /// filled top to bottom. Returns how many cells were filled.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTier`] if the table can draw a tier above the
    /// grid's winning tier. Checked up front, so the grid is left unchanged.
    #[instrument(skip(self, grid, rng))]
    pub fn fill_all<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Result<usize, EngineError> {
        self.check_fits(grid)?;
        let size = grid.size();
        let mut filled = 0;
        for col in 0..size {
            for row in 0..size {
                let at = Coord::new(row, col);
                if grid.tier(at) == EMPTY {
                    grid.put(at, self.draw(rng))?;
                    filled += 1;
                }
            }
        }
        debug!(filled, "Refilled grid");
        Ok(filled)
    }

    /// Fails if any tier in the table is above the grid's winning tier.
    pub fn check_fits(&self, grid: &Grid) -> Result<(), EngineError> {
        match self.tiers.iter().copied().max() {
            Some(tier) if tier > grid.max_tier() => Err(EngineError::InvalidTier {
                tier,
                max: grid.max_tier(),
            }),
            _ => Ok(()),
        }
    }
}
