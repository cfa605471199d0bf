//! Game settings loaded from TOML and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_justget10::{GameConfig, Tier};
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// The game keys (`size`, `winning_tier`, `initial_tile_count`,
/// `tier_distribution`) sit at the top level of the file; any key left out
/// takes its reference default.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Seed for a reproducible game. Entropy is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Engine configuration.
    #[serde(flatten)]
    game: GameConfig,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Grid dimension.
    pub size: Option<usize>,
    /// Winning tier.
    pub winning_tier: Option<Tier>,
    /// Tiles seeded at start.
    pub initial_tiles: Option<usize>,
    /// Random seed.
    pub seed: Option<u64>,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml_str(&content)?;
        info!(size = settings.game.size(), seed = ?settings.seed, "Settings loaded");
        Ok(settings)
    }

    /// Parses and validates settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads from `path` when given, otherwise starts from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides and re-validates.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, SettingsError> {
        if let Some(size) = overrides.size {
            self.game = self.game.with_size(size);
        }
        if let Some(tier) = overrides.winning_tier {
            self.game = self.game.with_winning_tier(tier);
        }
        if let Some(count) = overrides.initial_tiles {
            self.game = self.game.with_initial_tile_count(count);
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Renders the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string(self)
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.game
            .validate()
            .map_err(|e| SettingsError::new(e.to_string()))
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
