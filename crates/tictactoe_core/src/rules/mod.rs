//! Game rules for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_lines};
