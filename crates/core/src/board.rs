//! Board module - manages the game grid
//!
//! The board is an 11x13 grid of color indices (0 = empty).
//! Uses a single contiguous buffer, row-major (`y * cols + x`).
//! Coordinates: (x, y) where x ranges 0..cols (left to right), y ranges 0..rows (top to bottom).
//! Negative `y` is the ceiling: pieces may live there and it never collides.

use crate::pieces::Piece;
use crate::types::{CellColor, BOARD_COLS, BOARD_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<CellColor>,
}

impl Board {
    /// Create a new empty board with the engine dimensions
    pub fn new() -> Self {
        Self::with_size(BOARD_COLS, BOARD_ROWS)
    }

    /// Create an empty board of arbitrary size (tests and benches)
    pub fn with_size(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![CellColor::EMPTY; cols as usize * rows as usize],
        }
    }

    /// Build a board from rows of raw color indices.
    ///
    /// Returns `None` if the rows are ragged, empty, or contain an illegal index.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.as_ref().len()).ok()?;
        if width == 0 {
            return None;
        }

        let mut board = Self::with_size(width, height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return None;
            }
            for (x, &raw) in row.iter().enumerate() {
                board.cells[y * width as usize + x] = CellColor::new(raw)?;
            }
        }
        Some(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0
            || y < 0
            || i16::from(x) >= i16::from(self.cols)
            || i16::from(y) >= i16::from(self.rows)
        {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.cols
    }

    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<CellColor> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, color: CellColor) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Collision query used by the movement rules.
    ///
    /// Walls (`x < 0`, `x >= cols`) and the floor (`y >= rows`) count as occupied,
    /// as does any non-empty in-bounds cell. The ceiling (`y < 0`) never does.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || i16::from(x) >= i16::from(self.cols) || i16::from(y) >= i16::from(self.rows)
        {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.get(x, y).is_some_and(|c| !c.is_empty())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Cells of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[CellColor] {
        let width = self.cols as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Remove row `y`: every row above shifts down by one and an empty row
    /// appears at the top.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.rows as usize {
            return;
        }

        let width = self.cols as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(CellColor::EMPTY);
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a removal the same index is tested again,
    /// since the row above has slid into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.rows as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Write every occupied cell of `piece` into the grid at its anchor.
    ///
    /// No occupancy check is made here; the movement rules guarantee legality.
    /// Cells that fall outside the grid are skipped.
    pub fn lock_piece(&mut self, piece: &Piece) {
        for (x, y, color) in piece.cells() {
            self.set(x, y, color);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellColor] {
        &self.cells
    }

    /// Write the board as raw indices into a fixed-size grid (engine dimensions only).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.get(x as i8, y as i8).map(CellColor::index).unwrap_or(0);
            }
        }
    }

    /// Raw indices, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows as usize)
            .map(|y| self.row(y).iter().map(|c| c.index()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
