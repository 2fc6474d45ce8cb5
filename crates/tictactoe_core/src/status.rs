//! User-facing status line.

use super::Side;
use serde::{Deserialize, Serialize};

/// Status shown beneath the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Fresh game, nothing played yet.
    MakeYourMove,
    /// Game in progress after `n` total moves.
    Moves(usize),
    /// The last human click hit a taken cell.
    Occupied,
    /// Board full, no line completed.
    Tie,
    /// `side` completed a line after placing `moves` marks.
    Won {
        /// The winning side.
        side: Side,
        /// Marks the winner placed.
        moves: usize,
    },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::MakeYourMove => write!(f, "Make your move"),
            Status::Moves(n) => write!(f, "Moves: {}", n),
            Status::Occupied => write!(f, "Field already occupied!"),
            Status::Tie => write!(f, "It's a tie!"),
            Status::Won {
                side: Side::Human,
                moves,
            } => write!(f, "You won the game in {} moves!", moves),
            Status::Won {
                side: Side::Computer,
                moves,
            } => write!(f, "Computer won the game in {} moves!", moves),
        }
    }
}
