//! Tic-tac-toe - terminal game against a random computer.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Settings, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.delay_ms,
        cli.seed,
        cli.log_file,
    );

    run_tui(settings).await
}
