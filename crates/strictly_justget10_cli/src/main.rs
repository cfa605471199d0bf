//! Just Get 10 - terminal front end

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use strictly_justget10::GameSession;
use strictly_justget10_cli::cli::GameArgs;
use strictly_justget10_cli::{Cli, Command, Settings, Terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game } => run_play(game),
        Command::ShowConfig { game } => run_show_config(game),
    }
}

/// Resolves settings from the optional file and command-line overrides.
fn resolve(game: &GameArgs) -> Result<Settings> {
    let settings = Settings::load(game.config.as_deref())
        .context("Failed to load settings")?
        .with_overrides(game.overrides())
        .context("Invalid settings")?;
    Ok(settings)
}

/// Play in the terminal
#[instrument(skip_all)]
fn run_play(game: GameArgs) -> Result<()> {
    let settings = resolve(&game)?;
    let rng = match settings.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::with_rng(settings.game().clone(), rng)
        .context("Failed to start session")?;
    info!(seed = ?settings.seed(), "Starting terminal game");

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    let summary = terminal.run(&mut session)?;
    info!(?summary, "Terminal game finished");
    println!(
        "Wins: {}  Losses: {}  Turns: {}",
        summary.wins, summary.losses, summary.turns
    );
    Ok(())
}

/// Print the effective settings as TOML
fn run_show_config(game: GameArgs) -> Result<()> {
    let settings = resolve(&game)?;
    print!("{}", settings.to_toml()?);
    Ok(())
}
