//! Random computer opponent.

use super::{Board, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Picks a uniformly random empty position.
///
/// Samples from the explicit list of empty cells, so every free cell
/// (including the bottom-right one) is reachable and the call never loops.
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn pick_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let candidates = Position::valid_moves(board);
    let choice = candidates.choose(rng).copied();
    debug!(candidates = candidates.len(), ?choice, "Computer picked");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Side, Square};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Side::Human));
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_only_empty_cells_are_picked() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight] {
            board.set(pos, Square::Occupied(Side::Computer));
        }
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let pos = pick_random_move(&board, &mut rng).expect("cells remain");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_every_cell_reachable() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Position> = (0..500)
            .filter_map(|_| pick_random_move(&board, &mut rng))
            .collect();
        assert_eq!(seen.len(), 9);
        assert!(seen.contains(&Position::BottomRight));
    }

    #[test]
    fn test_single_gap_is_forced() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomRight {
                board.set(pos, Square::Occupied(Side::Human));
            }
        }
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_random_move(&board, &mut rng), Some(Position::BottomRight));
    }
}
