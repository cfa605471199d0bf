//! Line-oriented terminal front end.
//!
//! Renders the grid as text and forwards `row col` clicks to a
//! [`GameSession`]. Input and output are generic so the loop can be driven
//! from scripted buffers in tests.

use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use strictly_justget10::{EMPTY, EngineError, GameSession, Grid, Status};
use tracing::{debug, info, instrument, warn};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Click the cell at `(row, col)`.
    Click(usize, usize),
    /// Start a new game.
    Restart,
    /// Leave the loop.
    Quit,
    /// Show the command summary.
    Help,
}

impl Input {
    /// Parses one input line.
    ///
    /// Accepts `row col` or `row,col`, `r`/`restart`, `q`/`quit`, `h`/`help`/`?`.
    pub fn parse(line: &str) -> Option<Input> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "q" | "quit" | "exit" => return Some(Input::Quit),
            "r" | "restart" => return Some(Input::Restart),
            "h" | "help" | "?" => return Some(Input::Help),
            _ => {}
        }
        let mut parts = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty());
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Input::Click(row, col))
    }
}

const HELP: &str = "Enter `row col` to click a cell, `r` to restart, `q` to quit.";

/// Summary of a terminal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Games that reached `Won`.
    pub wins: u32,
    /// Games that reached `Lost`.
    pub losses: u32,
    /// Merge turns played across all games.
    pub turns: u32,
}

/// Drives a session from an input stream, rendering to an output stream.
pub struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    /// Creates a terminal over the given streams.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Plays until the player quits or input ends.
    #[instrument(skip_all)]
    pub fn run<R: Rng>(&mut self, session: &mut GameSession<R>) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        writeln!(self.output, "{}", HELP)?;
        self.render(session.grid())?;

        loop {
            if session.status().is_terminal() {
                summary.turns += session.turns();
                match session.status() {
                    Status::Won => {
                        summary.wins += 1;
                        writeln!(self.output, "You won!")?;
                    }
                    _ => {
                        summary.losses += 1;
                        writeln!(self.output, "Game over")?;
                    }
                }
                if !self.confirm("Play again? [y/n] ")? {
                    break;
                }
                session.restart().context("Failed to restart session")?;
                self.render(session.grid())?;
                continue;
            }

            let Some(line) = self.prompt("> ")? else {
                summary.turns += session.turns();
                break;
            };
            match Input::parse(&line) {
                Some(Input::Quit) => {
                    summary.turns += session.turns();
                    break;
                }
                Some(Input::Help) => writeln!(self.output, "{}", HELP)?,
                Some(Input::Restart) => {
                    summary.turns += session.turns();
                    session.restart().context("Failed to restart session")?;
                    info!("Player restarted");
                    self.render(session.grid())?;
                }
                Some(Input::Click(row, col)) => match session.on_click(row, col) {
                    Ok(outcome) => {
                        debug!(%outcome, "Turn played");
                        if !outcome.did_merge() {
                            writeln!(self.output, "Nothing to merge there.")?;
                        }
                        self.render(session.grid())?;
                    }
                    Err(err @ EngineError::OutOfBounds { .. }) => {
                        warn!(%err, "Rejected click");
                        writeln!(self.output, "{}", err)?;
                    }
                    Err(err) => return Err(err).context("Turn failed"),
                },
                None => writeln!(self.output, "Unrecognised input. {}", HELP)?,
            }
        }

        self.output.flush()?;
        Ok(summary)
    }

    /// Writes the grid with row and column indices.
    pub fn render(&mut self, grid: &Grid) -> Result<()> {
        write!(self.output, "{}", render_grid(grid))?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }

    fn confirm(&mut self, text: &str) -> Result<bool> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(false);
            };
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" | "q" => return Ok(false),
                _ => continue,
            }
        }
    }
}

/// Formats a grid with a column header and row labels.
pub fn render_grid(grid: &Grid) -> String {
    let size = grid.size();
    let width = grid
        .max_tier()
        .to_string()
        .len()
        .max(size.saturating_sub(1).to_string().len());
    let label = size.saturating_sub(1).to_string().len();

    let mut out = format!("{:label$} |", "");
    for col in 0..size {
        out.push_str(&format!(" {:>width$}", col));
    }
    out.push('\n');
    for (row, values) in grid.cells().chunks(size).enumerate() {
        out.push_str(&format!("{:>label$} |", row));
        for &tier in values {
            let cell = if tier == EMPTY { ".".to_string() } else { tier.to_string() };
            out.push_str(&format!(" {:>width$}", cell));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click_forms() {
        assert_eq!(Input::parse("1 2\n"), Some(Input::Click(1, 2)));
        assert_eq!(Input::parse(" 3,4 "), Some(Input::Click(3, 4)));
        assert_eq!(Input::parse("0, 0"), Some(Input::Click(0, 0)));
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(Input::parse("Q"), Some(Input::Quit));
        assert_eq!(Input::parse("restart"), Some(Input::Restart));
        assert_eq!(Input::parse("?"), Some(Input::Help));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Input::parse(""), None);
        assert_eq!(Input::parse("1"), None);
        assert_eq!(Input::parse("1 2 3"), None);
        assert_eq!(Input::parse("-1 2"), None);
        assert_eq!(Input::parse("a b"), None);
    }

    #[test]
    fn test_render_grid() {
        let grid = Grid::from_rows(&[[1, 0], [10, 3]], 10).unwrap();
        assert_eq!(render_grid(&grid), "  |  0  1\n0 |  1  .\n1 | 10  3\n");
    }
}
