//! Player trait and implementations.

mod computer;

pub use computer::RandomComputer;

use anyhow::Result;
use tictactoe_core::{GameState, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Picks the next position for the current state.
    async fn get_move(&mut self, state: &GameState) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
