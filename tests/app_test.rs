//! Tests for the terminal app: input handling, computer turns, rendering.

use anyhow::Result;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::collections::VecDeque;
use std::time::Duration;
use tictactoe::tui::{cell_areas, draw};
use tictactoe::{App, Command, Player, RandomComputer, computer_turn};
use tictactoe_core::{GameState, Phase, Position, Side, Square, Status};

/// Computer that plays a fixed list of positions.
struct ScriptedComputer {
    moves: VecDeque<Position>,
}

impl ScriptedComputer {
    fn new(moves: &[Position]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedComputer {
    async fn get_move(&mut self, _state: &GameState) -> Result<Position> {
        self.moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
    terminal
        .draw(|f| {
            app.set_cell_areas(cell_areas(f.area()));
            draw(f, app);
        })
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_human_wins_top_row() {
    let mut app = App::new();
    let mut computer = ScriptedComputer::new(&[Position::Center, Position::BottomLeft]);

    for cell in [Position::TopLeft, Position::TopCenter] {
        app.handle_command(Command::Select(cell));
        let reply = computer_turn(&mut app, &mut computer).await.expect("turn");
        assert!(reply.is_some());
    }
    app.handle_command(Command::Select(Position::TopRight));

    assert!(app.controller().state().is_won());
    assert_eq!(
        app.controller().status().to_string(),
        "You won the game in 3 moves!"
    );
    // Computer is not due after a win.
    assert_eq!(computer_turn(&mut app, &mut computer).await.expect("turn"), None);
}

#[tokio::test]
async fn test_input_ignored_while_computer_due() {
    let mut app = App::new();
    app.handle_command(Command::Select(Position::Center));
    assert!(app.awaiting_computer());

    app.handle_command(Command::Select(Position::TopLeft));
    app.handle_command(Command::Reset);
    assert_eq!(app.controller().state().move_count(), 1);
    assert_eq!(app.controller().state().board().get(Position::TopLeft), Square::Empty);

    let mut computer = RandomComputer::new("Computer", Duration::ZERO, Some(5));
    let reply = computer_turn(&mut app, &mut computer)
        .await
        .expect("turn")
        .expect("computer moved");
    assert_ne!(reply, Position::Center);
    assert_eq!(app.controller().state().phase(), Phase::AwaitingHuman);
    assert_eq!(app.controller().status(), Status::Moves(2));
}

#[tokio::test]
async fn test_random_games_always_finish() {
    for seed in 0..20 {
        let mut app = App::new();
        let mut computer = RandomComputer::new("Computer", Duration::ZERO, Some(seed));
        let mut cursor_walk = Position::ALL.into_iter();
        while !app.controller().state().is_over() {
            let free = app.controller().state().valid_moves();
            let pick = cursor_walk
                .by_ref()
                .find(|p| free.contains(p))
                .expect("free cell while running");
            app.handle_command(Command::Select(pick));
            computer_turn(&mut app, &mut computer).await.expect("turn");
            let state = app.controller().state();
            assert_eq!(state.move_count(), state.board().occupied_count());
        }
        app.handle_command(Command::Reset);
        assert_eq!(app.controller().state().move_count(), 0);
        assert_eq!(app.controller().status(), Status::MakeYourMove);
    }
}

#[test]
fn test_occupied_cell_message() {
    let mut app = App::new();
    app.handle_command(Command::Select(Position::Center));
    app.apply_computer_move(Position::TopLeft).expect("valid");
    app.handle_command(Command::Select(Position::TopLeft));
    assert_eq!(app.controller().status(), Status::Occupied);
    assert_eq!(
        app.controller().state().board().get(Position::TopLeft),
        Square::Occupied(Side::Computer)
    );
}

#[test]
fn test_reset_needs_a_move() {
    let mut app = App::new();
    app.handle_command(Command::Reset);
    assert_eq!(app.controller().status(), Status::MakeYourMove);
    assert!(!app.controller().reset_enabled());
}

#[test]
fn test_cursor_confirm_plays_cell() {
    let mut app = App::new();
    assert_eq!(app.cursor(), Position::Center);
    app.handle_command(Command::Cursor(crossterm::event::KeyCode::Up));
    app.handle_command(Command::Cursor(crossterm::event::KeyCode::Left));
    assert_eq!(app.cursor(), Position::TopLeft);
    app.handle_command(Command::Confirm);
    assert_eq!(
        app.controller().state().board().get(Position::TopLeft),
        Square::Occupied(Side::Human)
    );
}

#[test]
fn test_click_hits_cell() {
    let mut app = App::new();
    let areas = cell_areas(Rect::new(0, 0, 80, 24));
    app.set_cell_areas(areas);

    let target = areas[Position::BottomRight.to_index()];
    app.click(target.x + 1, target.y + 1);
    assert_eq!(
        app.controller().state().board().get(Position::BottomRight),
        Square::Occupied(Side::Human)
    );

    // Outside the board: nothing happens.
    app.click(0, 0);
    assert_eq!(app.controller().state().move_count(), 1);
}

#[test]
fn test_quit() {
    let mut app = App::new();
    assert!(!app.should_quit());
    app.handle_command(Command::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_status_and_marks() {
    let mut app = App::new();
    let screen = render(&mut app);
    assert!(screen.contains("Make your move"));
    assert!(screen.contains("Q: Quit"));
    assert!(!screen.contains("Reset"));

    app.handle_command(Command::Select(Position::Center));
    let screen = render(&mut app);
    assert!(screen.contains("Moves: 1"));
    assert!(screen.contains("Computer is thinking..."));
    assert!(screen.contains('X'));
}
