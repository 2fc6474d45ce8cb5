//! Win detection logic for tic-tac-toe.

use crate::{Board, Position, Side, Square};
use tracing::instrument;

/// The 8 winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns every line whose three squares are held by the same side.
///
/// A single move can complete two lines at once, so this may return more
/// than one entry. Both entries always belong to the same side.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board) -> Vec<(Side, [Position; 3])> {
    LINES
        .iter()
        .filter_map(|&[a, b, c]| {
            let sq = board.get(a);
            match sq {
                Square::Occupied(side) if sq == board.get(b) && sq == board.get(c) => {
                    Some((side, [a, b, c]))
                }
                _ => None,
            }
        })
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` if a side has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Side> {
    winning_lines(board).first().map(|(side, _)| *side)
}
