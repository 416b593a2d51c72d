use std::path::PathBuf;

use crate::board::Side;

/// A move the board refuses. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("square ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },
}

/// Errors raised while the opponent picks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no empty square left to play")]
    NoLegalMove,
}

/// Errors from playing a move into a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that end a controller run before the game does.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("the opponent must play PlayerB, got {0:?}")]
    OpponentSide(Side),

    #[error("opponent failed to move: {0}")]
    Search(#[from] SearchError),

    #[error("move rejected: {0}")]
    Play(#[from] PlayError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
