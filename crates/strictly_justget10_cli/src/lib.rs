//! Terminal front end for Strictly Just Get 10.
//!
//! The engine lives in `strictly_justget10`; this crate only loads
//! settings, renders the grid as text and forwards clicks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod settings;
pub mod terminal;

pub use cli::{Cli, Command};
pub use settings::{Overrides, Settings, SettingsError};
pub use terminal::{Input, RunSummary, Terminal, render_grid};
