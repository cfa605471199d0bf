//! Command-line interface for justget10.

use crate::settings::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_justget10::Tier;

/// Just Get 10 - merge equal neighbors until a tile reaches the winning tier
#[derive(Parser, Debug)]
#[command(name = "justget10")]
#[command(about = "Terminal Just Get 10 merge puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Settings shared with `show-config`
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the effective settings as TOML
    ShowConfig {
        /// Settings to resolve
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Settings file and overrides.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Grid dimension
    #[arg(long)]
    pub size: Option<usize>,

    /// Tier that wins the game
    #[arg(long)]
    pub winning_tier: Option<Tier>,

    /// Number of tiles seeded at start
    #[arg(long)]
    pub initial_tiles: Option<usize>,
}

impl GameArgs {
    /// Command-line overrides for the loaded settings.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            winning_tier: self.winning_tier,
            initial_tiles: self.initial_tiles,
            seed: self.seed,
        }
    }
}
