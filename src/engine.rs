//! The computer opponent
//!
//! Moves are chosen by a fixed priority cascade; the first step that
//! produces a square wins:
//!
//! 1. **Adjacency**: first empty square touching one of our own marks
//! 2. **Immediate win**: a square that completes one of our lines
//! 3. **Block**: a square that would complete one of the human's lines
//! 4. **Center**: the middle square, if free
//! 5. **Random**: any empty square, uniformly
//!
//! # Example
//!
//! ```
//! use connect_five::{Board, Opponent, Pos, Rule, Side};
//!
//! let mut opponent = Opponent::with_seed(Side::PlayerB, 7);
//! let decision = opponent.choose_move(&Board::new()).unwrap();
//! assert_eq!(decision.pos, Pos::new(2, 2));
//! assert_eq!(decision.rule, Rule::Center);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Side, BOARD_SIZE, CENTER, TOTAL_CELLS};
use crate::error::SearchError;
use crate::search::{find_adjacent, find_blocking_move, find_winning_move};

/// Draws attempted before the random step stops rejecting and picks from
/// the enumerated empty squares instead.
const MAX_RANDOM_DRAWS: usize = 4 * TOTAL_CELLS;

/// Cascade step that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Extends a cluster of our own marks
    Adjacency,
    /// Completes one of our lines
    ImmediateWin,
    /// Takes the square the human needs to complete a line
    Block,
    /// Takes the middle square
    Center,
    /// Uniform pick among empty squares
    Random,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Adjacency => "adjacency",
            Rule::ImmediateWin => "immediate win",
            Rule::Block => "block",
            Rule::Center => "center",
            Rule::Random => "random",
        };
        f.write_str(name)
    }
}

/// The opponent's chosen square and the step that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub pos: Pos,
    pub rule: Rule,
}

impl Decision {
    #[inline]
    fn new(pos: Pos, rule: Rule) -> Self {
        Self { pos, rule }
    }
}

/// Heuristic opponent playing one side of the board.
pub struct Opponent {
    side: Side,
    rng: StdRng,
}

impl Opponent {
    /// Opponent with an entropy-seeded random fallback
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            rng: StdRng::from_entropy(),
        }
    }

    /// Opponent whose random fallback replays the same sequence for the same seed
    #[must_use]
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Pick a square for our side.
    ///
    /// The board is only read; lookahead runs on scratch copies.
    /// Fails with [`SearchError::NoLegalMove`] on a full board.
    pub fn choose_move(&mut self, board: &Board) -> Result<Decision, SearchError> {
        if board.is_full() {
            return Err(SearchError::NoLegalMove);
        }

        let decision = self.cascade(board);
        log::debug!(
            "{} picks ({}, {}) by {}",
            self.side.name(),
            decision.pos.row,
            decision.pos.col,
            decision.rule
        );
        Ok(decision)
    }

    fn cascade(&mut self, board: &Board) -> Decision {
        // 1. Build on our own cluster
        if let Some(pos) = find_adjacent(board, self.side) {
            return Decision::new(pos, Rule::Adjacency);
        }

        // 2. Win now
        if let Some(pos) = find_winning_move(board, self.side) {
            return Decision::new(pos, Rule::ImmediateWin);
        }

        // 3. Stop the human winning next move
        if let Some(pos) = find_blocking_move(board, self.side) {
            return Decision::new(pos, Rule::Block);
        }

        // 4. Middle of the board
        if board.is_empty(CENTER) {
            return Decision::new(CENTER, Rule::Center);
        }

        // 5. Anything left
        Decision::new(self.random_empty(board), Rule::Random)
    }

    /// Uniform pick among empty squares. The board must not be full.
    fn random_empty(&mut self, board: &Board) -> Pos {
        for _ in 0..MAX_RANDOM_DRAWS {
            let row = self.rng.gen_range(0..BOARD_SIZE) as u8;
            let col = self.rng.gen_range(0..BOARD_SIZE) as u8;
            let pos = Pos::new(row, col);
            if board.is_empty(pos) {
                return pos;
            }
        }

        let empty: Vec<Pos> = board.empty_cells().collect();
        empty[self.rng.gen_range(0..empty.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use pretty_assertions::assert_eq;

    fn board_from(rows: [&str; BOARD_SIZE]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'A' => Cell::PlayerA,
                    'B' => Cell::PlayerB,
                    _ => Cell::Empty,
                };
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_takes_center() {
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
        let decision = opponent.choose_move(&Board::new()).unwrap();
        assert_eq!(decision, Decision::new(Pos::new(2, 2), Rule::Center));
    }

    #[test]
    fn test_completes_own_row() {
        let board = board_from([
            "BBBB.", //
            ".....", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
        let decision = opponent.choose_move(&board).unwrap();
        assert_eq!(decision.pos, Pos::new(0, 4));
    }

    #[test]
    fn test_winning_square_reached_through_adjacency() {
        // The gap in a four always touches our own mark, so adjacency finds
        // it before the win step runs; both agree on the square.
        let board = board_from([
            "BBBB.", //
            "AAA..", //
            ".....", //
            ".....", //
            "A....",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
        assert_eq!(
            opponent.choose_move(&board).unwrap(),
            Decision::new(Pos::new(0, 4), Rule::Adjacency)
        );
        assert_eq!(find_winning_move(&board, Side::PlayerB), Some(Pos::new(0, 4)));
    }

    #[test]
    fn test_blocks_human_row() {
        let board = board_from([
            ".....", //
            "AAAA.", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
        assert_eq!(
            opponent.choose_move(&board).unwrap(),
            Decision::new(Pos::new(1, 4), Rule::Block)
        );
    }

    #[test]
    fn test_adjacency_beats_block() {
        let board = board_from([
            "B....", //
            "AAAA.", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
        assert_eq!(
            opponent.choose_move(&board).unwrap(),
            Decision::new(Pos::new(0, 1), Rule::Adjacency)
        );
    }

    #[test]
    fn test_center_taken_falls_back_to_random() {
        let board = board_from([
            ".....", //
            ".....", //
            "..A..", //
            ".....", //
            ".....",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 42);
        let decision = opponent.choose_move(&board).unwrap();
        assert_eq!(decision.rule, Rule::Random);
        assert!(board.is_empty(decision.pos));
    }

    #[test]
    fn test_random_is_reproducible_per_seed() {
        let board = board_from([
            "A.A.A", //
            ".....", //
            "A.A.A", //
            ".....", //
            "A.A.A",
        ]);
        let first = Opponent::with_seed(Side::PlayerB, 9).choose_move(&board).unwrap();
        let second = Opponent::with_seed(Side::PlayerB, 9).choose_move(&board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_empty_square_is_found() {
        let board = board_from([
            "AABAA", //
            "BBABB", //
            "AA.AA", //
            "BBABB", //
            "AABAA",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 3);
        let decision = opponent.choose_move(&board).unwrap();
        assert_eq!(decision.pos, Pos::new(2, 2));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = board_from([
            "AABAA", //
            "BBABB", //
            "AABAA", //
            "BBABB", //
            "AABAA",
        ]);
        let mut opponent = Opponent::with_seed(Side::PlayerB, 3);
        assert_eq!(opponent.choose_move(&board), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn test_never_picks_occupied_square() {
        let mut opponent = Opponent::with_seed(Side::PlayerB, 1234);
        let mut human = Opponent::with_seed(Side::PlayerA, 4321);
        for _ in 0..50 {
            let mut board = Board::new();
            let mut turn = Side::PlayerA;
            while !board.is_full() {
                let player = if turn == Side::PlayerA { &mut human } else { &mut opponent };
                let decision = player.choose_move(&board).unwrap();
                assert!(board.is_empty(decision.pos));
                board.place(decision.pos, turn.mark());
                turn = turn.other();
            }
        }
    }
}
