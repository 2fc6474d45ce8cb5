//! Game state value object and its pure transitions.
//!
//! Every transition takes `&self` and returns a new state, so a rejected
//! move can never leave a half-applied board behind.

use super::action::{Move, MoveError};
use super::phases::Phase;
use super::{Board, Position, Side, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: board, phase and move history.
///
/// Invariant: the number of occupied squares equals `history.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHuman,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Total moves made by both sides (0-9).
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves made by `side`.
    pub fn moves_by(&self, side: Side) -> usize {
        self.history.iter().filter(|m| m.side == side).count()
    }

    /// The outcome flag: true once a line has been completed.
    pub fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }

    /// Returns true once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Side> {
        self.phase.winner()
    }

    /// Empty positions, in index order.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Every completed line on the board.
    pub fn winning_lines(&self) -> Vec<[Position; 3]> {
        rules::winning_lines(&self.board)
            .into_iter()
            .map(|(_, line)| line)
            .collect()
    }

    /// Applies a human move.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.move_count()))]
    pub fn human_move(&self, position: Position) -> Result<Self, MoveError> {
        self.apply(Move::new(Side::Human, position))
    }

    /// Applies a computer move.
    #[instrument(skip(self), fields(phase = %self.phase, moves = self.move_count()))]
    pub fn computer_move(&self, position: Position) -> Result<Self, MoveError> {
        self.apply(Move::new(Side::Computer, position))
    }

    /// Returns the initial state, whatever the current one.
    #[instrument(skip(self), fields(moves = self.move_count()))]
    pub fn reset(&self) -> Self {
        debug!("Resetting game state");
        Self::new()
    }

    /// Rebuilds a state from a move history, validating every move.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        moves
            .iter()
            .try_fold(Self::new(), |state, action| state.apply(*action))
    }

    /// Validates and applies a move, then evaluates win and tie.
    fn apply(&self, action: Move) -> Result<Self, MoveError> {
        if self.phase.is_over() {
            return Err(MoveError::GameOver);
        }
        if rules::is_full(&self.board) {
            return Err(MoveError::BoardFull);
        }
        if self.phase != Phase::awaiting(action.side) {
            return Err(MoveError::NotYourTurn(action.side));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        let mut next = self.clone();
        next.board.set(action.position, Square::Occupied(action.side));
        next.history.push(action);

        next.phase = if let Some(winner) = rules::check_winner(&next.board) {
            Phase::Won { winner }
        } else if rules::is_full(&next.board) {
            Phase::Tied
        } else {
            Phase::awaiting(action.side.opponent())
        };

        debug_assert_eq!(next.board.occupied_count(), next.history.len());
        debug!(%action, phase = %next.phase, "Move applied");
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
