use std::fmt;
use std::io;

use tracing::{debug, trace, warn};

use crate::error::{BoardError, MoveRejection};

use super::cells::CellGrid;
use super::{Action, PlayerColor};

pub const DEFAULT_SIZE: usize = 8;
pub const MIN_SIZE: usize = 2;
/// One column letter per file, `a` through `z`.
pub const MAX_SIZE: usize = 26;

/// The eight rays a capture can run along: axes first, then diagonals.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Three-character cell glyphs used when printing the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub dark: String,
    pub light: String,
    pub empty: String,
}

impl Glyphs {
    pub fn glyph(&self, color: PlayerColor) -> &str {
        match color {
            PlayerColor::Dark => self.dark.as_str(),
            PlayerColor::Light => self.light.as_str(),
            PlayerColor::Empty => self.empty.as_str(),
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            dark: " X ".to_string(),
            light: " O ".to_string(),
            empty: " - ".to_string(),
        }
    }
}

/// A square Reversi grid and the capture rule that governs it.
///
/// The board knows nothing about turn order. [`GameState`](super::GameState)
/// layers turns, passing and game end on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: CellGrid,
}

impl Board {
    /// Create a standard 8x8 board in the starting position.
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SIZE)
    }

    /// Create a `size` x `size` board in the starting position.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) || size % 2 != 0 {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::seeded(size))
    }

    /// Empty grid plus the four center discs: Light on the main diagonal,
    /// Dark on the anti-diagonal.
    fn seeded(size: usize) -> Self {
        let mut board = Board {
            cells: CellGrid::new(size),
        };
        let mid = size / 2;
        board.set(mid - 1, mid - 1, PlayerColor::Light);
        board.set(mid, mid, PlayerColor::Light);
        board.set(mid - 1, mid, PlayerColor::Dark);
        board.set(mid, mid - 1, PlayerColor::Dark);
        board
    }

    /// An independent copy for speculative play. Nothing is shared with `self`.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Contents of a square, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerColor> {
        if row < self.size() && col < self.size() {
            Some(self.cells.get(row, col))
        } else {
            None
        }
    }

    /// Overwrite a square. Returns false off the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, color: PlayerColor) -> bool {
        if row < self.size() && col < self.size() {
            self.cells.set(row, col, color);
            true
        } else {
            false
        }
    }

    /// Number of squares holding `color`. Counting `Empty` counts free squares.
    pub fn count_discs(&self, color: PlayerColor) -> usize {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells.get(row, col) == color)
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.count_discs(PlayerColor::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Map action coordinates onto the grid.
    fn square(&self, action: &Action) -> Option<(usize, usize)> {
        let row = usize::try_from(action.row()).ok()?;
        let col = usize::try_from(action.col()).ok()?;
        (row < self.size() && col < self.size()).then_some((row, col))
    }

    /// Check `action` against the rules with `expected` as the color to move.
    ///
    /// Caller misuse (off-board squares, a wrong or missing color) is also
    /// logged as a warning. Ordinary illegal moves are not.
    pub fn check_move(&self, action: &Action, expected: PlayerColor) -> Result<(), MoveRejection> {
        self.checked_square(action, expected).map(|_| ())
    }

    /// [`Board::check_move`], yielding the validated square.
    fn checked_square(
        &self,
        action: &Action,
        expected: PlayerColor,
    ) -> Result<(usize, usize), MoveRejection> {
        let result = self.validate(action, expected);
        if let Err(rejection) = &result {
            if rejection.is_misuse() {
                warn!(%action, %expected, reason = %rejection, "move rejected");
            } else {
                trace!(%action, reason = %rejection, "move rejected");
            }
        }
        result
    }

    fn validate(
        &self,
        action: &Action,
        expected: PlayerColor,
    ) -> Result<(usize, usize), MoveRejection> {
        let (row, col) = self
            .square(action)
            .ok_or(MoveRejection::OutOfBounds {
                row: action.row(),
                col: action.col(),
                size: self.size(),
            })?;

        if self.cells.get(row, col) != PlayerColor::Empty {
            return Err(MoveRejection::Occupied { row, col });
        }

        let acting = action.color();
        if !acting.is_disc() {
            return Err(MoveRejection::EmptyColor);
        }
        if acting != expected {
            return Err(MoveRejection::ColorMismatch { acting, expected });
        }

        if self.captures_any(row, col, acting) {
            Ok((row, col))
        } else {
            Err(MoveRejection::NoCapture { row, col })
        }
    }

    /// Whether `action` is legal for `expected`. See [`Board::check_move`].
    pub fn is_legal_move(&self, action: &Action, expected: PlayerColor) -> bool {
        self.check_move(action, expected).is_ok()
    }

    fn captures_any(&self, row: usize, col: usize, color: PlayerColor) -> bool {
        DIRECTIONS
            .iter()
            .any(|&dir| self.capture_run(row, col, color, dir) > 0)
    }

    /// Length of the opposing run `color` would capture walking from
    /// (`row`, `col`) along `dir`. Zero unless the run is non-empty and closed
    /// by a `color` disc before an empty square or the edge.
    fn capture_run(
        &self,
        row: usize,
        col: usize,
        color: PlayerColor,
        (dr, dc): (i32, i32),
    ) -> usize {
        let opponent = color.reverse();
        let size = self.size() as i32;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        let mut run = 0;

        while r >= 0 && r < size && c >= 0 && c < size {
            match self.cells.get(r as usize, c as usize) {
                cell if cell == opponent => run += 1,
                cell if cell == color => return run,
                _ => return 0,
            }
            r += dr;
            c += dc;
        }

        0
    }

    /// Squares a legal `action` would flip, ray by ray from the placed disc.
    /// Empty when the move is not legal for its own color.
    pub fn flips_for(&self, action: &Action) -> Vec<(usize, usize)> {
        match self.validate(action, action.color()) {
            Ok((row, col)) => self.flips_from(row, col, action.color()),
            Err(_) => Vec::new(),
        }
    }

    /// Every disc captured by `color` landing on (`row`, `col`).
    fn flips_from(&self, row: usize, col: usize, color: PlayerColor) -> Vec<(usize, usize)> {
        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            let run = self.capture_run(row, col, color, dir) as i32;
            for step in 1..=run {
                flips.push((
                    (row as i32 + dir.0 * step) as usize,
                    (col as i32 + dir.1 * step) as usize,
                ));
            }
        }
        flips
    }

    /// Place `action` and flip every captured run. Returns the number of
    /// discs flipped. The board is untouched on rejection.
    pub fn try_apply_move(&mut self, action: &Action) -> Result<usize, MoveRejection> {
        let color = action.color();
        let (row, col) = self.checked_square(action, color)?;

        let flips = self.flips_from(row, col, color);
        self.cells.set(row, col, color);
        for &(row, col) in &flips {
            self.cells.set(row, col, color);
        }

        debug!(%action, flipped = flips.len(), "move applied");
        Ok(flips.len())
    }

    /// Place `action` if legal for its own color. Returns whether it was placed.
    pub fn apply_move(&mut self, action: &Action) -> bool {
        self.try_apply_move(action).is_ok()
    }

    /// Whether any empty square is a legal move for `color`.
    pub fn has_any_legal_move(&self, color: PlayerColor) -> bool {
        color.is_disc()
            && self
                .empty_squares()
                .any(|(row, col)| self.captures_any(row, col, color))
    }

    /// Every legal move for `color`, in row-major order.
    pub fn legal_moves(&self, color: PlayerColor) -> Vec<Action> {
        if !color.is_disc() {
            return Vec::new();
        }
        self.empty_squares()
            .filter(|&(row, col)| self.captures_any(row, col, color))
            .map(|(row, col)| Action::new(color, row as i32, col as i32))
            .collect()
    }

    fn empty_squares(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size();
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.cells.get(row, col) == PlayerColor::Empty)
    }

    /// Print the grid with the default glyphs.
    pub fn render<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_with(out, &Glyphs::default())
    }

    /// Print the grid: column letters above and below, 1-based row numbers
    /// on both sides, one glyph per cell.
    pub fn render_with<W: io::Write>(&self, out: &mut W, glyphs: &Glyphs) -> io::Result<()> {
        let mut text = String::new();
        self.write_grid(&mut text, glyphs)
            .map_err(io::Error::other)?;
        out.write_all(text.as_bytes())
    }

    fn write_grid<W: fmt::Write>(&self, out: &mut W, glyphs: &Glyphs) -> fmt::Result {
        let size = self.size();
        let letters = || -> String {
            (0..size)
                .map(|i| format!(" {} ", (b'a' + i as u8) as char))
                .collect()
        };

        writeln!(out, "   {}", letters())?;
        for row in 0..size {
            write!(out, "{:>2} ", row + 1)?;
            for col in 0..size {
                out.write_str(glyphs.glyph(self.cells.get(row, col)))?;
            }
            writeln!(out, " {}", row + 1)?;
        }
        writeln!(out, "   {}", letters())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &Glyphs::default())
    }
}
