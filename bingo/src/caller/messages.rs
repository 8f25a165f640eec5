//! Caller actor message types.

use crate::game::{
    GameError,
    entities::GameVariant,
    views::{DrawOutcome, GameSnapshot, StatusSnapshot},
};
use tokio::sync::oneshot;

/// Messages that can be sent to a [`CallerActor`](super::CallerActor)
#[derive(Debug)]
pub enum CallerMessage {
    /// Start a new game of the given variant
    Start {
        variant: GameVariant,
        response: oneshot::Sender<GameSnapshot>,
    },

    /// Draw the next number or Keno round
    Draw {
        response: oneshot::Sender<Result<DrawOutcome, GameError>>,
    },

    /// Read the current game state
    Status {
        response: oneshot::Sender<Result<StatusSnapshot, GameError>>,
    },

    /// Restart the active variant
    Reset {
        response: oneshot::Sender<Result<GameSnapshot, GameError>>,
    },

    /// Stop the actor loop
    Shutdown,
}

impl CallerMessage {
    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::Draw { .. } => "draw",
            Self::Status { .. } => "status",
            Self::Reset { .. } => "reset",
            Self::Shutdown => "shutdown",
        }
    }
}
