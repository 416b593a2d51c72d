//! Cluster extension: play next to a mark we already own

use crate::board::{Board, Pos, Side};

/// Neighbour offsets in scan order: rows -1, 0, 1, each over cols -1, 0, 1,
/// skipping the cell itself.
pub const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True if any on-board neighbour of `pos` carries `side`'s mark
#[inline]
pub fn touches(board: &Board, pos: Pos, side: Side) -> bool {
    NEIGHBOURS
        .iter()
        .filter_map(|&(dr, dc)| pos.offset(dr, dc))
        .any(|n| board.get(n) == side.mark())
}

/// First empty cell, row-major, with a neighbour owned by `side`.
///
/// This is the first match under the scan order, not the best-placed one.
pub fn find_adjacent(board: &Board, side: Side) -> Option<Pos> {
    board.empty_cells().find(|&pos| touches(board, pos, side))
}
