//! Error types for the game engine.

use thiserror::Error;
use wb_core::CoreError;

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game session.
#[derive(Debug, Error)]
pub enum GameError {
    /// A world model error (template loading or lookup).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The save store could not be read or written.
    #[error("save store error: {0}")]
    Store(String),

    /// No location is available to start from (every location is the
    /// finish, or the world is empty).
    #[error("no start location available")]
    NoStartLocation,
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Store(err.to_string())
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Store(err.to_string())
    }
}
