//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which side
//! marked which cell and can be validated independently of execution.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Every square is occupied.
    #[display("Board is full")]
    BoardFull,

    /// It's not this side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Side),
}

impl std::error::Error for MoveError {}
