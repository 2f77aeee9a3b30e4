//! Core Connect Four game logic: board representation, player types, the
//! immutable state transitions, and the engine a front end drives.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS, WIN_LENGTH};
pub use engine::GameEngine;
pub use player::Player;
pub use state::{DropResult, GameState};
