use std::path::PathBuf;

/// Why a stone could not be placed.
///
/// Placement failures are ordinary outcomes, not bugs: the board they were
/// attempted on is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
}

/// Errors from parsing names given on the command line or in config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown stone color '{0}'")]
    UnknownStone(String),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

/// Errors from the turn/undo/restart glue in [`crate::game`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error("no moves to undo")]
    NothingToUndo,

    #[error("it is not the engine's turn")]
    NotAiTurn,

    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
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
}
