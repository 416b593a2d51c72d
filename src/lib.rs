//! Connect-five on a 5x5 board
//!
//! A human (`PlayerA`, moving first) plays against a heuristic opponent
//! (`PlayerB`). A side wins by filling a row, a column, or one of the two
//! main diagonals; a full board with no such line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with one bitboard per side
//! - [`rules`]: Win/draw evaluation and move application
//! - [`search`]: The opponent's individual move-finding steps
//! - [`engine`]: The opponent's priority cascade
//! - [`game`]: Game session and the turn controller
//! - [`console`]: Terminal input and board rendering
//! - [`ui`]: Native window frontend
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! # Quick Start
//!
//! ```
//! use connect_five::{Game, Opponent, Outcome, Side};
//!
//! let mut game = Game::new();
//! let mut opponent = Opponent::with_seed(Side::PlayerB, 1);
//!
//! game.play(0, 0).unwrap();
//! let decision = opponent.choose_move(game.board()).unwrap();
//! assert_eq!(game.play_at(decision.pos).unwrap(), Outcome::Ongoing);
//! ```
//!
//! # Opponent Priority
//!
//! 1. Extend a cluster of its own marks
//! 2. Immediate winning move
//! 3. Block the human's immediate win
//! 4. Take the centre
//! 5. Random empty square

pub mod board;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, Side, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{Decision, Opponent, Rule};
pub use error::{ConfigError, ControlError, MoveError, PlayError, SearchError};
pub use game::{Controller, Game, Phase};
pub use rules::{apply, evaluate, Outcome};
