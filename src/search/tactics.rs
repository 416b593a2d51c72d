//! One-ply tactics: complete our own line, or fill the square that would
//! complete the other side's.
//!
//! Every hypothetical placement is made on a scratch copy of the board, so
//! the caller's board is never written to.

use crate::board::{Board, Pos, Side};
use crate::rules::evaluate;

/// Would `side` win by marking `pos`?
#[inline]
pub fn wins_at(board: &Board, pos: Pos, side: Side) -> bool {
    let mut scratch = *board;
    scratch.place(pos, side.mark());
    evaluate(&scratch).winner() == Some(side)
}

/// First empty cell, row-major, that wins outright for `side`
pub fn find_winning_move(board: &Board, side: Side) -> Option<Pos> {
    board.empty_cells().find(|&pos| wins_at(board, pos, side))
}

/// First empty cell, row-major, where `side`'s opponent would win.
/// `side` takes that square to block.
pub fn find_blocking_move(board: &Board, side: Side) -> Option<Pos> {
    find_winning_move(board, side.other())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn board_with(cells: &[(u8, u8)], mark: Cell) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place(Pos::new(r, c), mark);
        }
        board
    }

    #[test]
    fn test_completes_row() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Cell::PlayerB);
        assert_eq!(find_winning_move(&board, Side::PlayerB), Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_completes_gap_in_anti_diagonal() {
        let board = board_with(&[(0, 4), (1, 3), (3, 1), (4, 0)], Cell::PlayerB);
        assert_eq!(find_winning_move(&board, Side::PlayerB), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_no_win_available() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2)], Cell::PlayerB);
        assert_eq!(find_winning_move(&board, Side::PlayerB), None);
    }

    #[test]
    fn test_blocks_opponent_row() {
        let board = board_with(&[(1, 0), (1, 1), (1, 2), (1, 3)], Cell::PlayerA);
        assert_eq!(find_blocking_move(&board, Side::PlayerB), Some(Pos::new(1, 4)));
        assert_eq!(find_winning_move(&board, Side::PlayerB), None);
    }

    #[test]
    fn test_lookahead_leaves_board_untouched() {
        let board = board_with(&[(1, 0), (1, 1), (1, 2), (1, 3)], Cell::PlayerA);
        let before = board;
        let _ = find_winning_move(&board, Side::PlayerA);
        let _ = find_blocking_move(&board, Side::PlayerB);
        assert_eq!(board, before);
    }

    #[test]
    fn test_filling_last_square_for_draw_is_not_a_win() {
        // Full board except (4, 4), no line completable there.
        let pattern = ["AABAA", "BBABB", "AABAA", "BBABB", "AABA."];
        let mut board = Board::new();
        for (r, row) in pattern.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'A' => Cell::PlayerA,
                    'B' => Cell::PlayerB,
                    _ => Cell::Empty,
                };
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        assert_eq!(find_winning_move(&board, Side::PlayerB), None);
        assert_eq!(find_winning_move(&board, Side::PlayerA), None);
    }
}
