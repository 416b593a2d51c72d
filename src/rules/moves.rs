//! Move validation and application
//!
//! The only path through which a game writes marks onto its board.

use crate::board::{Board, Pos, Side};
use crate::error::MoveError;

/// A mark to be placed, consumed by [`apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub side: Side,
}

impl Move {
    pub fn new(pos: Pos, side: Side) -> Self {
        Self { pos, side }
    }
}

/// Check that `(row, col)` is on the board and empty.
///
/// Bounds are checked before occupancy.
pub fn validate(board: &Board, row: usize, col: usize) -> Result<Pos, MoveError> {
    let pos = Pos::try_new(row, col)?;
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied { row, col });
    }
    Ok(pos)
}

/// Place `side`'s mark at `(row, col)` and return the resulting board.
///
/// The input board is never modified, so a failed move leaves it as it was.
pub fn apply(board: &Board, row: usize, col: usize, side: Side) -> Result<Board, MoveError> {
    let pos = validate(board, row, col)?;
    let mut next = *board;
    next.place(pos, side.mark());
    log::trace!("{} marks ({}, {})", side.name(), row, col);
    Ok(next)
}

/// [`apply`] for an already-built [`Move`]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    apply(board, mv.pos.row as usize, mv.pos.col as usize, mv.side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, TOTAL_CELLS};

    #[test]
    fn test_apply_round_trip() {
        let board = Board::new();
        let next = apply(&board, 3, 1, Side::PlayerA).unwrap();
        assert_eq!(next.cell_at(3, 1), Ok(Cell::PlayerA));
        assert_eq!(next.empty_cells().count(), TOTAL_CELLS - 1);
        // Input board untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            apply(&board, 5, 0, Side::PlayerA),
            Err(MoveError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(
            apply(&board, 0, usize::MAX, Side::PlayerB),
            Err(MoveError::OutOfBounds { row: 0, col: usize::MAX })
        );
    }

    #[test]
    fn test_apply_occupied_leaves_board_unchanged() {
        let board = apply(&Board::new(), 2, 2, Side::PlayerB).unwrap();
        let before = board;
        assert_eq!(
            apply(&board, 2, 2, Side::PlayerA),
            Err(MoveError::Occupied { row: 2, col: 2 })
        );
        assert_eq!(board, before);
        assert_eq!(board.cell_at(2, 2), Ok(Cell::PlayerB));
    }

    #[test]
    fn test_bounds_checked_before_occupancy() {
        let mut board = Board::new();
        for (pos, _) in Board::new().all_cells() {
            board.place(pos, Cell::PlayerA);
        }
        assert_eq!(
            validate(&board, 7, 7),
            Err(MoveError::OutOfBounds { row: 7, col: 7 })
        );
    }

    #[test]
    fn test_apply_move_value() {
        let mv = Move::new(Pos::new(0, 4), Side::PlayerB);
        let board = apply_move(&Board::new(), mv).unwrap();
        assert_eq!(board.get(Pos::new(0, 4)), Cell::PlayerB);
    }
}
