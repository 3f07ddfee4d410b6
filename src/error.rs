use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors raised when a game cannot be constructed from the given parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("a {width}x{height} grid exceeds the limit of {max_cells} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },

    #[error("a game needs exactly 2 players (got {0})")]
    WrongPlayerCount(usize),

    #[error("player {0} is registered more than once")]
    DuplicatePlayer(PlayerId),
}

/// Errors raised by a rejected drop. None of them mutate the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (0..{width})")]
    InvalidColumn { column: i64, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over, start a new game")]
    GameOver,
}

/// Errors raised by the player registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{max} players max!")]
    TooManyPlayers { max: usize },

    #[error("player {0} is already registered")]
    DuplicatePlayer(PlayerId),
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

/// Errors surfaced by the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no game in progress, use `new-game` first")]
    NoGame,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
