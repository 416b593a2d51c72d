//! Bitboard holding one side's marks

use super::{Pos, TOTAL_CELLS};

/// One bit per cell, row-major. 25 cells fit in a single `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u32,
}

const FULL: u32 = (1u32 << TOTAL_CELLS) - 1;

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u32 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u32 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Bitwise union of two boards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    /// Cells not set in this board
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard {
            bits: !self.bits & FULL,
        }
    }

    /// True when every one of the 25 cells is set
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits & FULL == FULL
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u32,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Pos::from_index(idx))
    }
}
