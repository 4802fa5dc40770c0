use std::path::PathBuf;

use crate::game::PlayerColor;

/// Why the engine refused a move.
///
/// Misuse variants (`OutOfBounds`, `ColorMismatch`, `EmptyColor`) mean the
/// caller handed the engine something it should never have asked about. The
/// rule variants (`Occupied`, `NoCapture`) are ordinary game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("square ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("cannot place a {acting} disc on {expected}'s turn")]
    ColorMismatch {
        acting: PlayerColor,
        expected: PlayerColor,
    },

    #[error("an action must carry a disc color")]
    EmptyColor,

    #[error("square ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("square ({row}, {col}) captures nothing")]
    NoCapture { row: usize, col: usize },
}

impl MoveRejection {
    /// True when the rejection points at a bug in the caller rather than a
    /// normal illegal move.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            MoveRejection::OutOfBounds { .. }
                | MoveRejection::ColorMismatch { .. }
                | MoveRejection::EmptyColor
        )
    }
}

/// Errors raised while constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {0} is invalid (must be even and between 2 and 26)")]
    InvalidSize(usize),
}

/// Errors raised when a game-level move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0}")]
    Rejected(#[from] MoveRejection),

    #[error("the game is over")]
    GameOver,
}

/// Errors raised while reading a move typed in square notation.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no move entered")]
    Empty,

    #[error("'{0}' is not a column letter")]
    BadColumn(char),

    #[error("'{0}' is not a row number")]
    BadRow(String),

    #[error("input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
