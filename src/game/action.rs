use std::fmt;

use crate::error::InputError;

use super::PlayerColor;

/// A candidate or committed move: a color placed at a zero-based square.
///
/// Coordinates are not checked here; the board decides whether they are on
/// the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    color: PlayerColor,
    row: i32,
    col: i32,
}

impl Action {
    pub fn new(color: PlayerColor, row: i32, col: i32) -> Self {
        Action { color, row, col }
    }

    /// Parse square notation such as `"c4"` (column letter, then 1-based row).
    ///
    /// Surrounding whitespace is ignored and the letter is case-insensitive.
    /// Only the shape of the text is checked; the square may still be off the
    /// board.
    pub fn parse(text: &str, color: PlayerColor) -> Result<Self, InputError> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = chars.next().ok_or(InputError::Empty)?;
        if !letter.is_ascii_alphabetic() {
            return Err(InputError::BadColumn(letter));
        }
        let col = (letter.to_ascii_lowercase() as u8 - b'a') as i32;

        let digits = chars.as_str();
        let row: i32 = match digits.parse::<u32>() {
            Ok(n) if n >= 1 && digits.bytes().all(|b| b.is_ascii_digit()) => {
                i32::try_from(n).map_err(|_| InputError::BadRow(digits.to_string()))? - 1
            }
            _ => return Err(InputError::BadRow(digits.to_string())),
        };

        Ok(Action::new(color, row, col))
    }

    pub fn color(&self) -> PlayerColor {
        self.color
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Square notation (`"c4"`), or `None` when the square has no letter.
    pub fn notation(&self) -> Option<String> {
        if self.row < 0 || !(0..26).contains(&self.col) {
            return None;
        }
        let letter = (b'a' + self.col as u8) as char;
        let row = self.row.checked_add(1)?;
        Some(format!("{letter}{row}"))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation() {
            Some(square) => write!(f, "{} {}", self.color, square),
            None => write!(f, "{} ({}, {})", self.color, self.row, self.col),
        }
    }
}
