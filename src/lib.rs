//! Tic-tac-toe against a random computer, played in the terminal.
//!
//! The game logic lives in [`tictactoe_core`]; this crate adds settings,
//! the paced computer player and the terminal UI.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{Settings, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::load(None)?.with_overrides(Some(250), Some(7), None);
//! run_tui(settings).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod players;
mod settings;
pub mod tui;

pub use cli::Cli;
pub use players::{Player, RandomComputer};
pub use settings::{DEFAULT_SETTINGS_PATH, Settings, SettingsError};
pub use tui::{App, Command, computer_turn, run_tui};
