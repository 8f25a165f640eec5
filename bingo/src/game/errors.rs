//! Game error types.

use thiserror::Error;

/// Errors that reject a game operation before any state changes
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GameError {
    /// Unrecognized or missing variant name on start
    #[error("invalid game type '{0}': expected americano, britanico or keno")]
    InvalidVariant(String),

    /// Draw, status or reset attempted before any game was started
    #[error("no active game: start a game first")]
    NoActiveGame,
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
