//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{CellView, Side, Square};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Splits the frame into title, board, status and help areas.
fn screen_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),                // Title
        Constraint::Min(CELL_HEIGHT * 3),     // Board
        Constraint::Length(3),                // Status
        Constraint::Length(3),                // Help
    ])
    .areas(area)
}

/// Cell rectangles for a frame of the given size, in index order.
///
/// Drawing and mouse hit testing both go through here.
pub fn cell_areas(frame_area: Rect) -> [Rect; 9] {
    let [_, board, _, _] = screen_areas(frame_area);
    let x0 = board.x + board.width.saturating_sub(CELL_WIDTH * 3) / 2;
    let y0 = board.y + board.height.saturating_sub(CELL_HEIGHT * 3) / 2;

    std::array::from_fn(|i| {
        let (row, col) = ((i / 3) as u16, (i % 3) as u16);
        Rect::new(
            x0 + col * CELL_WIDTH,
            y0 + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, _, status, help] = screen_areas(frame.area());
    let controller = app.controller();

    let title_text = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title_text, title);

    let areas = cell_areas(frame.area());
    for (cell, area) in controller.cells().into_iter().zip(areas) {
        draw_cell(frame, area, cell, cell.position == app.cursor());
    }

    let status_text = Paragraph::new(controller.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, status);

    let help_text = if app.awaiting_computer() {
        "Computer is thinking...".to_string()
    } else if controller.reset_enabled() {
        format!(
            "1-9 / arrows + Enter / click: move | R: {} | Q: Quit",
            controller.reset_label()
        )
    } else {
        "1-9 / arrows + Enter / click: move | Q: Quit".to_string()
    };
    let help_widget = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help_widget, help);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView, highlighted: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            cell.position.shortcut().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(side @ Side::Human) => (
            side.mark().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(side @ Side::Computer) => (
            side.mark().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.dimmed {
        style = style.fg(Color::DarkGray).add_modifier(Modifier::DIM);
    }

    let cursor = highlighted && cell.enabled;
    let border = if cursor {
        Style::default().fg(Color::Yellow)
    } else if cell.enabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    if cursor {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::REVERSED));
    }
    frame.render_widget(paragraph, area);
}
