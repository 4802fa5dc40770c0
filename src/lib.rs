//! # Reversi
//!
//! Rules engine for Reversi (Othello) on any even-sized square board, with a
//! terminal UI built with Ratatui and a plain console mode.
//!
//! ## Modules
//!
//! - [`game`]: Core rules: packed board, capture rule, moves, turn order
//! - [`player`]: Move sources: typed square notation, scripted move lists
//! - [`ui`]: Terminal UI and line-oriented console game
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod ui;
