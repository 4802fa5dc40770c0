//! Core Reversi rules: packed board storage, the capture rule, move
//! application and a turn-tracking game state with automatic passing.

mod action;
mod board;
mod cells;
mod color;
mod state;

pub use action::Action;
pub use board::{Board, Glyphs, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use color::PlayerColor;
pub use state::{GameOutcome, GameState, TurnReport};
