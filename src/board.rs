//! Board storage: a flat row-major grid of cell values.

use crate::types::{Mark, Move};
use serde::{Deserialize, Serialize};

/// N-by-N board.
///
/// Cells are stored row-major in a fixed-length vector; the grid is
/// sized at construction and never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Move>,
}

impl Board {
    /// Creates an empty board of the given size.
    pub(crate) fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Move::empty(row, col)))
            .collect();
        Self { size, cells }
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is out of range for a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Returns the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> &Move {
        &self.cells[self.index(row, col)]
    }

    /// Returns the mark at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, size)`.
    pub fn mark(&self, row: usize, col: usize) -> &Mark {
        self.get(row, col).mark()
    }

    /// Checks if the cell at (row, col) is unoccupied.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, size)`.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.mark(row, col).is_empty()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.mark().is_empty())
    }

    /// Writes a move into the cell at its own coordinates.
    pub(crate) fn set(&mut self, mv: Move) {
        let index = self.index(mv.row(), mv.col());
        self.cells[index] = mv;
    }

    /// Returns every cell back to the empty sentinel, coordinates intact.
    pub(crate) fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Move::empty(cell.row(), cell.col());
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.mark(row, col) {
                    Mark::Empty => ".".to_string(),
                    Mark::Taken(label) => label.to_string(),
                };
                result.push_str(&symbol);
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
                result.push_str(&"-+".repeat(self.size - 1));
                result.push('-');
                result.push('\n');
            }
        }
        result
    }
}
