//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, command_for_key};
pub use ui::{cell_areas, draw};

use crate::players::{Player, RandomComputer};
use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::Position;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI until the user quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    init_tracing(&settings)?;
    info!(?settings, "Starting tic-tac-toe TUI");

    let mut computer = RandomComputer::new("Computer", settings.computer_delay(), *settings.seed());

    let mut terminal = setup_terminal()?;
    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &mut computer).await;
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    first_error(res, restored)
}

/// Enters raw mode and the alternate screen. Anything done before a
/// failure is undone before returning.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let entered = (|| -> Result<Tui> {
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
    })();
    if entered.is_err() {
        let _ = restore_terminal();
    }
    entered
}

/// Leaves raw mode and the alternate screen. Every step runs even if an
/// earlier one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, cursor::Show);
    raw?;
    screen?;
    Ok(())
}

/// The game loop's error wins over a restore error.
fn first_error(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        error!(error = ?e, "Failed to restore terminal");
    }
    res.and(restored)
}

/// Sends log output to the settings' log file so it stays off the screen.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

async fn run_app(terminal: &mut Tui, app: &mut App, computer: &mut dyn Player) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.set_cell_areas(cell_areas(f.area()));
            draw(f, app);
        })?;

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        if app.awaiting_computer() {
            computer_turn(app, computer).await?;
            discard_pending_input()?;
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(command) = command_for_key(key) {
                        app.handle_command(command);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.click(mouse.column, mouse.row);
                }
                _ => {}
            }
        }
    }
}

/// Lets `computer` play if it is due. The player's own delay runs to
/// completion before the move lands.
#[instrument(skip_all, fields(player = %computer.name()))]
pub async fn computer_turn(app: &mut App, computer: &mut dyn Player) -> Result<Option<Position>> {
    if !app.awaiting_computer() {
        return Ok(None);
    }
    let position = computer.get_move(app.controller().state()).await?;
    app.apply_computer_move(position)?;
    info!(%position, status = %app.controller().status(), "Computer moved");
    Ok(Some(position))
}

/// Drops every input event queued while the board was disabled.
fn discard_pending_input() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}
