//! Board structure: one bitboard per side

use super::bitboard::{Bitboard, BitboardIter};
use super::{Cell, Pos, TOTAL_CELLS};
use crate::error::MoveError;

/// The 5x5 grid. `Copy`, so lookahead works on a scratch value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    player_a: Bitboard,
    player_b: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            player_a: Bitboard::new(),
            player_b: Bitboard::new(),
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.player_a.get(pos) {
            Cell::PlayerA
        } else if self.player_b.get(pos) {
            Cell::PlayerB
        } else {
            Cell::Empty
        }
    }

    /// Bounds-checked lookup by raw coordinates
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.player_a.get(pos) && !self.player_b.get(pos)
    }

    /// Emptiness by raw coordinates. Off-board squares are never empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        Pos::try_new(row, col).is_ok_and(|pos| self.is_empty(pos))
    }

    /// Unconditional write. Occupancy is the caller's concern; only the
    /// coordinates are checked.
    pub fn set_cell(&mut self, row: usize, col: usize, mark: Cell) -> Result<(), MoveError> {
        let pos = Pos::try_new(row, col)?;
        self.place(pos, mark);
        Ok(())
    }

    /// Overwrite a cell. `Cell::Empty` clears it.
    #[inline]
    pub(crate) fn place(&mut self, pos: Pos, mark: Cell) {
        self.player_a.clear(pos);
        self.player_b.clear(pos);
        match mark {
            Cell::PlayerA => self.player_a.set(pos),
            Cell::PlayerB => self.player_b.set(pos),
            Cell::Empty => {}
        }
    }

    /// Every cell with its mark, row-major. Call again to restart.
    pub fn all_cells(&self) -> Cells<'_> {
        Cells {
            board: self,
            next: 0,
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> BitboardIter {
        self.occupied().complement().iter_ones()
    }

    #[inline]
    fn occupied(&self) -> Bitboard {
        self.player_a.union(self.player_b)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }
}

/// Row-major walk over the board, see [`Board::all_cells`]
pub struct Cells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for Cells<'_> {
    type Item = (Pos, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= TOTAL_CELLS {
            return None;
        }
        let pos = Pos::from_index(self.next);
        self.next += 1;
        Some((pos, self.board.get(pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = TOTAL_CELLS.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}
