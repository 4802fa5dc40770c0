use super::PlayerColor;

const CELLS_PER_WORD: usize = 32;
const OCCUPIED: u64 = 0b01;
const DARK: u64 = 0b10;
const CELL_MASK: u64 = 0b11;

/// Square contents packed two bits per cell.
///
/// The low bit of each pair marks the square as occupied and the high bit
/// selects Dark over Light. The color bit is always cleared on empty squares,
/// so equal grids compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CellGrid {
    size: usize,
    words: Vec<u64>,
}

impl CellGrid {
    /// An all-empty `size` x `size` grid.
    pub(crate) fn new(size: usize) -> Self {
        let cells = size * size;
        CellGrid {
            size,
            words: vec![0; cells.div_ceil(CELLS_PER_WORD)],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Word index and bit shift of a cell. Caller guarantees bounds.
    fn locate(&self, row: usize, col: usize) -> (usize, u32) {
        debug_assert!(row < self.size && col < self.size);
        let index = row * self.size + col;
        (index / CELLS_PER_WORD, (2 * (index % CELLS_PER_WORD)) as u32)
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> PlayerColor {
        let (word, shift) = self.locate(row, col);
        let bits = (self.words[word] >> shift) & CELL_MASK;
        if bits & OCCUPIED == 0 {
            PlayerColor::Empty
        } else if bits & DARK != 0 {
            PlayerColor::Dark
        } else {
            PlayerColor::Light
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, color: PlayerColor) {
        let (word, shift) = self.locate(row, col);
        let bits = match color {
            PlayerColor::Empty => 0,
            PlayerColor::Light => OCCUPIED,
            PlayerColor::Dark => OCCUPIED | DARK,
        };
        let slot = &mut self.words[word];
        *slot = (*slot & !(CELL_MASK << shift)) | (bits << shift);
    }
}
