//! Pure tic-tac-toe game logic for a human against a random computer.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Side`], [`Position`]
//! - **Rules**: win and full-board detection over the 8 fixed lines
//! - **State**: [`GameState`], a value object with pure transitions and a
//!   [`Phase`] state machine
//! - **Controller**: [`GameController`], the surface a UI drives with cell
//!   and reset events
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Position, Status};
//!
//! let mut controller = GameController::new();
//! controller.human_move(Position::Center).unwrap();
//! assert_eq!(controller.status(), Status::Moves(1));
//!
//! let mut rng = rand::rng();
//! let reply = controller.computer_move(&mut rng).unwrap();
//! assert_ne!(reply, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod opponent;
mod phases;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use controller::{CellView, GameController};
pub use opponent::pick_random_move;
pub use phases::Phase;
pub use position::Position;
pub use state::GameState;
pub use status::Status;
pub use types::{Board, Side, Square};
