//! Core connect-N game logic: board representation, player types, the win
//! scanner, and the game state machine with immutable transitions.

mod board;
mod player;
mod scan;
mod state;

/// Columns that can legally receive the next piece.
pub type LegalColumns = Vec<usize>;

pub use board::{Board, Cell, DropError};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
