//! Board module - manages the game grid
//!
//! The board is a 4x4 grid of tile values where `0` is an empty cell and any
//! other value is a power of two >= 2.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Direction, BOARD_CELLS, BOARD_SIZE};

/// Number of cells in a single row or column
pub const LINE_LEN: usize = BOARD_SIZE as usize;

/// One row or column, read in board order (left-to-right or top-to-bottom)
pub type Line = [u32; LINE_LEN];

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of tile values, row-major order (y * SIZE + x)
    cells: [u32; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_CELLS],
        }
    }

    /// Build a board from rows (`rows[y][x]`)
    pub fn from_rows(rows: [[u32; LINE_LEN]; LINE_LEN]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * LINE_LEN..(y + 1) * LINE_LEN].copy_from_slice(row);
        }
        board
    }

    /// Copy the board out as rows (`rows[y][x]`)
    pub fn to_rows(&self) -> [[u32; LINE_LEN]; LINE_LEN] {
        let mut rows = [[0; LINE_LEN]; LINE_LEN];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * LINE_LEN..(y + 1) * LINE_LEN]);
        }
        rows
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some((y as usize) * LINE_LEN + (x as usize))
    }

    /// Get width/height of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get tile value at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<u32> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set tile value at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, value: u32) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds no tile
    pub fn is_empty_at(&self, x: u8, y: u8) -> bool {
        self.get(x, y) == Some(0)
    }

    /// True if at least one cell is empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&0)
    }

    /// All empty positions in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| ((idx % LINE_LEN) as u8, (idx / LINE_LEN) as u8))
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|value| **value != 0).count()
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|value| *value as u64).sum()
    }

    /// Highest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if any cell equals its right or lower neighbour.
    ///
    /// Scans every adjacency on the full grid, including the last row and column.
    pub fn has_adjacent_pair(&self) -> bool {
        for y in 0..LINE_LEN {
            for x in 0..LINE_LEN {
                let value = self.cells[y * LINE_LEN + x];
                if x + 1 < LINE_LEN && value == self.cells[y * LINE_LEN + x + 1] {
                    return true;
                }
                if y + 1 < LINE_LEN && value == self.cells[(y + 1) * LINE_LEN + x] {
                    return true;
                }
            }
        }
        false
    }

    /// Extract line `index` for a direction.
    ///
    /// Up/Down read column `index` top-to-bottom; Left/Right read row `index`
    /// left-to-right. Orientation never depends on the slide direction itself.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut line = [0; LINE_LEN];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = self.cells[Self::line_index(direction, index, i)];
        }
        line
    }

    /// Write line `index` back in the same orientation [`Board::line`] read it.
    pub fn set_line(&mut self, direction: Direction, index: usize, line: Line) {
        for (i, value) in line.iter().enumerate() {
            self.cells[Self::line_index(direction, index, i)] = *value;
        }
    }

    #[inline(always)]
    fn line_index(direction: Direction, index: usize, i: usize) -> usize {
        if direction.is_vertical() {
            i * LINE_LEN + index
        } else {
            index * LINE_LEN + i
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
