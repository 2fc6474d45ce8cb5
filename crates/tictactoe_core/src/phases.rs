//! Game phases.

use super::Side;
use serde::{Deserialize, Serialize};

/// Where the game currently stands.
///
/// `AwaitingHuman -> AwaitingComputer -> AwaitingHuman -> ...` until a
/// move produces `Won` or `Tied`. Only reset leaves a terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHuman,
    /// The human has moved; the computer picks next.
    AwaitingComputer,
    /// A side completed a line.
    Won {
        /// The side that completed the line.
        winner: Side,
    },
    /// Board full with no completed line.
    Tied,
}

impl Phase {
    /// Returns true for `Won` and `Tied`.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won { .. } | Phase::Tied)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            Phase::Won { winner } => Some(winner),
            _ => None,
        }
    }

    /// The phase in which `side` is expected to move.
    pub(crate) fn awaiting(side: Side) -> Self {
        match side {
            Side::Human => Phase::AwaitingHuman,
            Side::Computer => Phase::AwaitingComputer,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHuman => write!(f, "Awaiting human"),
            Phase::AwaitingComputer => write!(f, "Awaiting computer"),
            Phase::Won { winner } => write!(f, "{} won", winner),
            Phase::Tied => write!(f, "Tied"),
        }
    }
}
