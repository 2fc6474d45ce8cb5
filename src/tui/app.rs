//! Application state and logic.

use super::input::{self, Command};
use ratatui::layout::Rect;
use tictactoe_core::{GameController, MoveError, Position};
use tracing::{debug, instrument};

/// Main application state.
pub struct App {
    controller: GameController,
    cursor: Position,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the computer's turn is pending.
    pub fn awaiting_computer(&self) -> bool {
        self.controller.awaiting_computer()
    }

    /// Records where the cells were last drawn, for mouse hit testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a user command.
    ///
    /// Board input and reset are ignored while the computer is due.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            _ if self.awaiting_computer() => debug!("Input disabled during computer turn"),
            Command::Select(position) => self.select(position),
            Command::Confirm => self.select(self.cursor),
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::Reset => {
                if self.controller.reset_enabled() {
                    self.controller.reset();
                    self.cursor = Position::Center;
                }
            }
        }
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) {
        let hit = Position::ALL.into_iter().find(|pos| {
            let area = self.cell_areas[pos.to_index()];
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        });
        if let Some(position) = hit {
            self.handle_command(Command::Select(position));
        }
    }

    /// Applies the computer's chosen cell.
    pub fn apply_computer_move(&mut self, position: Position) -> Result<(), MoveError> {
        self.controller.apply_computer_move(position)
    }

    fn select(&mut self, position: Position) {
        self.cursor = position;
        if let Err(e) = self.controller.human_move(position) {
            debug!(error = %e, "Move rejected");
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
