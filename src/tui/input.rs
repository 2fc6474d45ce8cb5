//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the given cell.
    Select(Position),
    /// Move the highlight cursor.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    Confirm,
    /// Reset (or restart) the game.
    Reset,
    /// Leave the app.
    Quit,
}

/// Maps a key event to a command. Releases and repeats are ignored.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
        KeyCode::Char(c) => Position::from_shortcut(c).map(Command::Select),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::Cursor(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
