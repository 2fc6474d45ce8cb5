//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./tictactoe.toml when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
