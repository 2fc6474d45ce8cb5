//! Random computer opponent with a pacing delay.

use super::Player;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictactoe_core::{GameState, Position, pick_random_move};
use tracing::{debug, instrument};

/// Computer that waits `delay`, then picks a uniformly random empty cell.
pub struct RandomComputer {
    name: String,
    delay: Duration,
    rng: StdRng,
}

impl RandomComputer {
    /// Creates a computer player. A `seed` makes its choices repeatable.
    pub fn new(name: impl Into<String>, delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            delay,
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomComputer {
    #[instrument(skip(self, state), fields(moves = state.move_count()))]
    async fn get_move(&mut self, state: &GameState) -> Result<Position> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Computer thinking");
        tokio::time::sleep(self.delay).await;

        let position = pick_random_move(state.board(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_seed_same_choice() {
        let state = GameState::new()
            .human_move(Position::Center)
            .expect("valid move");
        let mut a = RandomComputer::new("A", Duration::ZERO, Some(11));
        let mut b = RandomComputer::new("B", Duration::ZERO, Some(11));
        for _ in 0..5 {
            assert_eq!(
                a.get_move(&state).await.expect("move"),
                b.get_move(&state).await.expect("move")
            );
        }
    }

    #[tokio::test]
    async fn test_waits_for_delay() {
        let state = GameState::new()
            .human_move(Position::Center)
            .expect("valid move");
        let mut computer = RandomComputer::new("Computer", Duration::from_millis(30), Some(1));
        let started = std::time::Instant::now();
        let position = computer.get_move(&state).await.expect("move");
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert_ne!(position, Position::Center);
    }
}
