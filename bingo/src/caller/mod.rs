//! Caller module: the async actor that owns the process's game.
//!
//! A bingo "caller" draws and announces numbers. Here it is a Tokio task with
//! an mpsc inbox owning one [`GameEngine`](crate::GameEngine); every request
//! is a message answered on a oneshot channel. Handlers running on a
//! multi-threaded runtime share the cheap, cloneable [`CallerHandle`] and
//! never touch game state directly.
//!
//! ## Example
//!
//! ```
//! use bingo::{CallerActor, GameEngine, GameVariant};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let caller = CallerActor::spawn(GameEngine::with_seed(7), 16);
//!
//! caller.start(GameVariant::Keno).await.unwrap();
//! let round = caller.draw().await.unwrap();
//! assert_eq!(round.drawn_numbers().len(), 20);
//! # }
//! ```

pub mod actor;
pub mod messages;

pub use actor::{CallerActor, CallerHandle, DEFAULT_INBOX_CAPACITY};
pub use messages::CallerMessage;

use crate::game::GameError;
use thiserror::Error;

/// Errors returned through a [`CallerHandle`]
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CallerError {
    /// The actor is no longer running
    #[error("caller is not running")]
    Closed,

    /// The engine rejected the operation
    #[error(transparent)]
    Game(#[from] GameError),
}
