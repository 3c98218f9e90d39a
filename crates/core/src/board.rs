//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell is either empty or occupied.
//! Uses a flat row-major vector (`y * width + x`); dimensions never change after
//! construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Pieces may hang above row 0 (negative y); those cells are never stored.

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty standard 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given size.
    ///
    /// Used for scripted scenarios; the games themselves always play on the
    /// standard board.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a board from row art, top row first: `#` is occupied, anything
    /// else is empty. All rows must have the same length.
    ///
    /// ```
    /// use term_arcade_core::Board;
    ///
    /// let board = Board::from_rows(&["...", "#.#"]);
    /// assert_eq!(board.width(), 3);
    /// assert!(board.is_occupied(2, 1));
    /// assert!(!board.is_occupied(1, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.chars().count() == width),
            "all rows must have the same width"
        );

        let mut board = Self::with_size(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                board.cells[y * width + x] = ch == '#';
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if a row is completely filled
    pub fn is_full_row(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    /// Borrow one row of cells; `y` must be in range
    fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Write every occupied cell of `piece` into the board.
    ///
    /// Cells above the visible board (negative absolute row) are dropped.
    /// Validity is the caller's concern; this never fails.
    pub fn fix(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, true);
            }
        }
    }

    /// Clear a row and shift all rows above down
    fn clear_row(&mut self, y: usize) {
        let width = self.width;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[0..width] {
            *cell = false;
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Rows are scanned top to bottom. When row `y` is full it is removed,
    /// everything above moves down one and an empty row appears on top; the
    /// scan then continues at `y + 1` without re-checking `y`. A row that only
    /// becomes full through such a shift is left for a later pass.
    pub fn clear_completed_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.is_full_row(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Render the board back into `#`/`.` row art
    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, Shape};
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, true);
        board.set(5, 10, true);

        assert_eq!(board.get(0, 0), Some(true));
        assert_eq!(board.get(5, 10), Some(true));

        assert!(board.cells[0]);
        assert!(board.cells[10 * 10 + 5]);
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let art = ["#..#", "....", "####"];
        let board = Board::from_rows(&art);
        assert_eq!(board.to_rows(), art.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_fix_skips_cells_above_the_board() {
        let mut board = Board::with_size(4, 4);
        // I piece at y = -1 puts its row of minos on absolute row 0.
        let mut piece = Piece::new(PieceKind::I, 0, -1);
        board.fix(&piece);
        assert_eq!(board.to_rows()[0], "####");

        // A vertical I two rows above the board keeps only its bottom two minos.
        let mut board = Board::with_size(4, 4);
        piece.shape = Shape::for_kind(PieceKind::I).rotated(crate::types::RotationDirection::Clockwise);
        piece.y = -2;
        board.fix(&piece);
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(2, 0));
        assert!(board.is_occupied(2, 1));
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::from_rows(&["#...", ".#..", "####"]);
        assert_eq!(board.clear_completed_rows(), 1);
        assert_eq!(board.to_rows(), vec!["....", "#...", ".#.."]);
    }
}
