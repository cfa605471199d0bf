//! Session configuration and the spawn-weight table.

use super::error::EngineError;
use super::types::{DEFAULT_INITIAL_TILES, DEFAULT_SIZE, DEFAULT_WINNING_TIER, EMPTY, Tier};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One entry of a [`TierDistribution`]: a tier and its relative weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeight {
    /// Tier to spawn.
    pub tier: Tier,
    /// Relative weight (need not sum to 1 across entries).
    pub weight: f64,
}

impl TierWeight {
    /// Creates a new entry.
    pub fn new(tier: Tier, weight: f64) -> Self {
        Self { tier, weight }
    }
}

/// Ordered `(tier, weight)` pairs for random spawning.
///
/// Weights are relative: tier `t_i` is drawn with probability
/// `w_i / sum(w)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierDistribution(Vec<TierWeight>);

impl TierDistribution {
    /// Builds a distribution from `(tier, weight)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (Tier, f64)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(tier, weight)| TierWeight::new(tier, weight))
                .collect(),
        )
    }

    /// Distribution that always yields `tier`.
    pub fn single(tier: Tier) -> Self {
        Self::new([(tier, 1.0)])
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[TierWeight] {
        &self.0
    }

    /// Highest tier the distribution can produce.
    pub fn max_tier(&self) -> Option<Tier> {
        self.0.iter().map(|w| w.tier).max()
    }

    /// Checks the table against a winning tier.
    ///
    /// Spawned tiers must be non-empty and strictly below the winning tier,
    /// and every weight must be finite and positive.
    #[instrument(skip(self))]
    pub fn validate(&self, winning_tier: Tier) -> Result<(), EngineError> {
        if self.0.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "tier distribution is empty".to_string(),
            ));
        }
        for entry in &self.0 {
            if entry.tier == EMPTY || entry.tier >= winning_tier {
                return Err(EngineError::InvalidConfiguration(format!(
                    "spawn tier {} must be in 1..{}",
                    entry.tier, winning_tier
                )));
            }
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(EngineError::InvalidConfiguration(format!(
                    "weight {} for tier {} must be positive",
                    entry.weight, entry.tier
                )));
            }
        }
        Ok(())
    }
}

impl Default for TierDistribution {
    fn default() -> Self {
        Self::new([(1, 0.4), (2, 0.3), (3, 0.25), (4, 0.05)])
    }
}

/// Configuration supplied when a session is created.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimension N.
    #[serde(default = "default_size")]
    size: usize,

    /// Tier that ends the game in a win.
    #[serde(default = "default_winning_tier")]
    winning_tier: Tier,

    /// Tiles seeded at session start.
    #[serde(default = "default_initial_tiles")]
    initial_tile_count: usize,

    /// Spawn weights.
    #[serde(default)]
    tier_distribution: TierDistribution,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_winning_tier() -> Tier {
    DEFAULT_WINNING_TIER
}

fn default_initial_tiles() -> usize {
    DEFAULT_INITIAL_TILES
}

impl GameConfig {
    /// Creates a validated configuration.
    #[instrument(skip(tier_distribution))]
    pub fn new(
        size: usize,
        winning_tier: Tier,
        initial_tile_count: usize,
        tier_distribution: TierDistribution,
    ) -> Result<Self, EngineError> {
        let config = Self {
            size,
            winning_tier,
            initial_tile_count,
            tier_distribution,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different grid size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Returns a copy with a different winning tier.
    pub fn with_winning_tier(mut self, winning_tier: Tier) -> Self {
        self.winning_tier = winning_tier;
        self
    }

    /// Returns a copy with a different initial tile count.
    pub fn with_initial_tile_count(mut self, count: usize) -> Self {
        self.initial_tile_count = count;
        self
    }

    /// Returns a copy with a different spawn table.
    pub fn with_tier_distribution(mut self, distribution: TierDistribution) -> Self {
        self.tier_distribution = distribution;
        self
    }

    /// Checks every option.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidConfiguration`] for a zero size, a winning tier
    /// below 2, or an unusable tier distribution.
    #[instrument(skip(self), fields(size = self.size, winning_tier = self.winning_tier))]
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size == 0 {
            return Err(EngineError::InvalidConfiguration(
                "size must be positive".to_string(),
            ));
        }
        if self.winning_tier < 2 {
            return Err(EngineError::InvalidConfiguration(format!(
                "winning tier {} must be at least 2",
                self.winning_tier
            )));
        }
        self.tier_distribution.validate(self.winning_tier)?;
        debug!("Configuration valid");
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            winning_tier: DEFAULT_WINNING_TIER,
            initial_tile_count: DEFAULT_INITIAL_TILES,
            tier_distribution: TierDistribution::default(),
        }
    }
}
