//! Board representation for the 5x5 game

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Cells};

use crate::error::MoveError;

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// Centre cell, preferred by the opponent when nothing tactical applies
pub const CENTER: Pos = Pos { row: 2, col: 2 };

/// Mark held by a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    /// Side owning this mark, `None` for an empty cell
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Side::PlayerA),
            Cell::PlayerB => Some(Side::PlayerB),
        }
    }
}

/// One of the two players. `PlayerA` is the human and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerA,
    PlayerB,
}

impl Side {
    /// Mark this side writes on the board
    #[inline]
    pub fn mark(self) -> Cell {
        match self {
            Side::PlayerA => Cell::PlayerA,
            Side::PlayerB => Cell::PlayerB,
        }
    }

    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::PlayerA => Side::PlayerB,
            Side::PlayerB => Side::PlayerA,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::PlayerA => "Player A",
            Side::PlayerB => "Player B",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for coordinates coming from outside the engine
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(MoveError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbour at the given offset, if it stays on the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
