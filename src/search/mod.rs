//! Move-finding steps used by the opponent
//!
//! Contains:
//! - Adjacency extension: grow an existing cluster of own marks
//! - One-ply tactics: immediate win and immediate block

pub mod adjacency;
pub mod tactics;

pub use adjacency::{find_adjacent, touches, NEIGHBOURS};
pub use tactics::{find_blocking_move, find_winning_move, wins_at};
