//! Game controller: the surface a presentation layer drives.
//!
//! The UI delivers "cell clicked" and "reset clicked" events here and reads
//! back the status text and per-cell visual state. The controller holds no
//! toolkit types.

use super::action::MoveError;
use super::opponent::pick_random_move;
use super::phases::Phase;
use super::state::GameState;
use super::status::Status;
use super::{Position, Side, Square};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Visual state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Position of the cell.
    pub position: Position,
    /// What the cell holds.
    pub square: Square,
    /// De-emphasized because it is not part of the winning line.
    pub dimmed: bool,
    /// Accepts clicks.
    pub enabled: bool,
}

/// Owns the game state and the status line.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    status: Status,
}

impl GameController {
    /// Creates a controller in the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            status: Status::MakeYourMove,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Handles a click on `position` by the human.
    ///
    /// An occupied cell switches the status to [`Status::Occupied`] and
    /// leaves the board untouched. Clicks after the game ended, or while the
    /// computer is due, change nothing.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn human_move(&mut self, position: Position) -> Result<(), MoveError> {
        match self.state.human_move(position) {
            Ok(next) => {
                self.commit(next, Side::Human);
                Ok(())
            }
            Err(e @ MoveError::SquareOccupied(_)) => {
                warn!(%position, "Human picked an occupied cell");
                self.status = Status::Occupied;
                Err(e)
            }
            Err(e) => {
                debug!(error = %e, "Human move ignored");
                Err(e)
            }
        }
    }

    /// Plays the computer's turn with a random empty cell.
    ///
    /// Does nothing unless the computer is due. Returns the chosen cell.
    #[instrument(skip(self, rng), fields(phase = %self.state.phase()))]
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.state.phase() != Phase::AwaitingComputer {
            return None;
        }
        let position = pick_random_move(self.state.board(), rng)?;
        self.apply_computer_move(position).ok()?;
        Some(position)
    }

    /// Plays the computer's turn at a position chosen elsewhere.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn apply_computer_move(&mut self, position: Position) -> Result<(), MoveError> {
        let next = self.state.computer_move(position)?;
        self.commit(next, Side::Computer);
        Ok(())
    }

    /// Restores the initial state and all visual state.
    #[instrument(skip(self), fields(moves = self.state.move_count()))]
    pub fn reset(&mut self) {
        info!("Game reset");
        self.state = self.state.reset();
        self.status = Status::MakeYourMove;
    }

    /// True while the human may click cells.
    pub fn board_enabled(&self) -> bool {
        self.state.phase() == Phase::AwaitingHuman
    }

    /// True while the computer is due to move.
    pub fn awaiting_computer(&self) -> bool {
        self.state.phase() == Phase::AwaitingComputer
    }

    /// The reset control is offered once anything has been played.
    pub fn reset_enabled(&self) -> bool {
        self.state.move_count() > 0
    }

    /// Label of the reset control.
    pub fn reset_label(&self) -> &'static str {
        if self.state.is_over() { "Restart" } else { "Reset" }
    }

    /// Visual state for all nine cells in index order.
    pub fn cells(&self) -> [CellView; 9] {
        let winning: Vec<Position> = self.state.winning_lines().into_iter().flatten().collect();
        let enabled = self.board_enabled();
        Position::ALL.map(|position| CellView {
            position,
            square: self.state.board().get(position),
            dimmed: !winning.is_empty() && !winning.contains(&position),
            enabled,
        })
    }

    fn commit(&mut self, next: GameState, mover: Side) {
        self.state = next;
        self.status = match self.state.phase() {
            Phase::Won { winner } => {
                let moves = self.state.moves_by(winner);
                info!(%winner, moves, "Game won");
                Status::Won {
                    side: winner,
                    moves,
                }
            }
            Phase::Tied => {
                info!("Game tied");
                Status::Tie
            }
            Phase::AwaitingHuman | Phase::AwaitingComputer => {
                debug!(%mover, moves = self.state.move_count(), "Turn complete");
                Status::Moves(self.state.move_count())
            }
        };
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    #[test]
    fn test_initial_controls() {
        let controller = GameController::new();
        assert_eq!(controller.status(), Status::MakeYourMove);
        assert!(controller.board_enabled());
        assert!(!controller.reset_enabled());
        assert_eq!(controller.reset_label(), "Reset");
        assert!(controller.cells().iter().all(|c| !c.dimmed && c.enabled));
    }

    #[test]
    fn test_board_disabled_while_computer_due() {
        let mut controller = GameController::new();
        controller.human_move(Center).expect("valid move");
        assert!(!controller.board_enabled());
        assert!(controller.awaiting_computer());
        assert!(controller.reset_enabled());
        assert!(controller.cells().iter().all(|c| !c.enabled));
        assert_eq!(
            controller.human_move(TopLeft),
            Err(MoveError::NotYourTurn(Side::Human))
        );
        assert_eq!(controller.status(), Status::Moves(1));
    }

    #[test]
    fn test_winning_line_stays_bright() {
        let mut controller = GameController::new();
        for (human, computer) in [(TopLeft, MiddleLeft), (TopCenter, Center)] {
            controller.human_move(human).expect("valid move");
            controller.apply_computer_move(computer).expect("valid move");
        }
        controller.human_move(TopRight).expect("valid move");

        assert_eq!(controller.reset_label(), "Restart");
        let cells = controller.cells();
        for cell in cells {
            let in_line = matches!(cell.position, TopLeft | TopCenter | TopRight);
            assert_eq!(cell.dimmed, !in_line, "{}", cell.position);
            assert!(!cell.enabled);
        }
    }

    #[test]
    fn test_move_completing_two_lines_keeps_both_bright() {
        let mut controller = GameController::new();
        let script = [
            (TopCenter, Center),
            (TopRight, MiddleRight),
            (MiddleLeft, BottomCenter),
            (BottomLeft, BottomRight),
        ];
        for (human, computer) in script {
            controller.human_move(human).expect("valid move");
            controller.apply_computer_move(computer).expect("valid move");
        }
        // The last empty cell closes the top row and the left column at once.
        controller.human_move(TopLeft).expect("valid move");

        assert_eq!(controller.state().phase(), Phase::Won { winner: Side::Human });
        assert_eq!(controller.status(), Status::Won { side: Side::Human, moves: 5 });
        assert_eq!(controller.state().winning_lines().len(), 2);
        for cell in controller.cells() {
            let in_line = matches!(
                cell.position,
                TopLeft | TopCenter | TopRight | MiddleLeft | BottomLeft
            );
            assert_eq!(cell.dimmed, !in_line, "{}", cell.position);
        }
    }
}
