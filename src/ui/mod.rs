//! Front ends: a full-screen terminal UI and a plain line-oriented console
//! game that prints the board after every move.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
