//! Win and draw detection
//!
//! A side wins by filling one of the 12 lines of the board: 5 columns,
//! 5 rows, or one of the two main diagonals. A full board with no complete
//! line is a draw.

use crate::board::{Board, Cell, Pos, Side, BOARD_SIZE};

/// Five cells making up a line
pub type Line = [Pos; BOARD_SIZE];

/// State of the game as read off the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Ongoing,
    Won(Side),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Won(side) => Some(side),
            _ => None,
        }
    }
}

const fn build_lines() -> [Line; 2 * BOARD_SIZE + 2] {
    let mut lines = [[Pos { row: 0, col: 0 }; BOARD_SIZE]; 2 * BOARD_SIZE + 2];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut k = 0;
        while k < BOARD_SIZE {
            // Column i
            lines[i][k] = Pos { row: k as u8, col: i as u8 };
            // Row i
            lines[BOARD_SIZE + i][k] = Pos { row: i as u8, col: k as u8 };
            k += 1;
        }
        // Main diagonal and anti-diagonal
        lines[2 * BOARD_SIZE][i] = Pos { row: i as u8, col: i as u8 };
        lines[2 * BOARD_SIZE + 1][i] = Pos {
            row: i as u8,
            col: (BOARD_SIZE - 1 - i) as u8,
        };
        i += 1;
    }
    lines
}

/// All lines in check order: columns, rows, `\` diagonal, `/` diagonal.
/// The order decides which line is reported when more than one is complete.
pub const LINES: [Line; 2 * BOARD_SIZE + 2] = build_lines();

/// Side owning every cell of `line`, if any
#[inline]
fn line_owner(board: &Board, line: &Line) -> Option<Side> {
    let first = board.get(line[0]);
    if first == Cell::Empty {
        return None;
    }
    line[1..]
        .iter()
        .all(|&pos| board.get(pos) == first)
        .then_some(first)
        .and_then(Cell::side)
}

/// First complete line in check order, with its owner
pub fn winning_line(board: &Board) -> Option<(Side, Line)> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|side| (side, *line)))
}

/// Evaluate the board.
///
/// Any complete line wins for its owner; otherwise the game is ongoing while
/// an empty cell remains and drawn once the board is full.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((side, _)) = winning_line(board) {
        return Outcome::Won(side);
    }
    if board.all_cells().any(|(_, cell)| cell == Cell::Empty) {
        Outcome::Ongoing
    } else {
        Outcome::Draw
    }
}
