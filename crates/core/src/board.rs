//! Board module - manages the 4x4 placement grid
//!
//! The board is a flat array of 16 cells in row-major order (index = row * 4 + column).
//! A cell is either empty or holds one card. The only mutation is placing a card
//! into an empty cell; placed cards are never moved, overwritten or cleared.

use crate::error::PlaceError;
use crate::types::{Card, Cell, Line, Location, BOARD_CELLS, LINE_LEN};

/// The game board - 16 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * 4 + column)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get cell at `index`
    /// Returns None if out of bounds
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Place `card` into the empty cell at `index`.
    ///
    /// Rejects indices outside the board and cells that already hold a card.
    pub fn place(&mut self, index: usize, card: Card) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfRange(index))?;
        if cell.is_some() {
            return Err(PlaceError::Occupied(index));
        }
        *cell = Some(card);
        Ok(())
    }

    pub fn place_at(&mut self, location: Location, card: Card) -> Result<(), PlaceError> {
        self.place(location.index(), card)
    }

    /// Check if position is within bounds and empty
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Some(_)))
    }

    /// Card values along `line`, in traversal order.
    ///
    /// Returns None when any cell on the line is still empty.
    pub fn line_values(&self, line: &Line) -> Option<[u8; LINE_LEN]> {
        let mut out = [0u8; LINE_LEN];
        for (slot, &index) in out.iter_mut().zip(line.cells.iter()) {
            *slot = self.cell(index)??.value();
        }
        Some(out)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Lowest empty index, if any
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.is_none().then_some(i))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Write card values into a flat grid (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [u8; BOARD_CELLS]) {
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = cell.map_or(0, Card::value);
        }
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_flat(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
