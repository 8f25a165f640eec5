//! Caller actor implementation with async message handling.

use super::{CallerError, messages::CallerMessage};
use crate::game::{
    GameEngine, GameError,
    entities::GameVariant,
    views::{DrawOutcome, GameSnapshot, StatusSnapshot},
};
use tokio::sync::{mpsc, oneshot};

/// Default inbox capacity.
pub const DEFAULT_INBOX_CAPACITY: usize = 100;

/// Caller actor handle for sending messages
#[derive(Clone, Debug)]
pub struct CallerHandle {
    sender: mpsc::Sender<CallerMessage>,
}

impl CallerHandle {
    /// Create a new caller handle
    pub fn new(sender: mpsc::Sender<CallerMessage>) -> Self {
        Self { sender }
    }

    /// Send a raw message to the caller
    pub async fn send(&self, message: CallerMessage) -> Result<(), CallerError> {
        self.sender
            .send(message)
            .await
            .map_err(|_| CallerError::Closed)
    }

    /// Whether the actor has stopped receiving messages
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Start a new game
    pub async fn start(&self, variant: GameVariant) -> Result<GameSnapshot, CallerError> {
        self.request(|response| CallerMessage::Start { variant, response })
            .await
    }

    /// Draw the next number or Keno round
    pub async fn draw(&self) -> Result<DrawOutcome, CallerError> {
        Ok(self
            .request(|response| CallerMessage::Draw { response })
            .await??)
    }

    /// Current game snapshot
    pub async fn status(&self) -> Result<StatusSnapshot, CallerError> {
        Ok(self
            .request(|response| CallerMessage::Status { response })
            .await??)
    }

    /// Restart the active variant
    pub async fn reset(&self) -> Result<GameSnapshot, CallerError> {
        Ok(self
            .request(|response| CallerMessage::Reset { response })
            .await??)
    }

    /// Ask the actor to stop. A no-op if it already has.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(CallerMessage::Shutdown).await;
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> CallerMessage,
    ) -> Result<T, CallerError> {
        let (response_tx, response_rx) = oneshot::channel();
        self.send(message(response_tx)).await?;
        response_rx.await.map_err(|_| CallerError::Closed)
    }
}

/// Actor owning the single game engine of the process.
///
/// Messages are handled strictly in arrival order, one at a time, so no two
/// game operations ever interleave.
pub struct CallerActor {
    /// Game engine (state + RNG)
    engine: GameEngine,

    /// Message inbox
    inbox: mpsc::Receiver<CallerMessage>,

    /// Set once a shutdown message arrives
    is_closed: bool,
}

impl CallerActor {
    /// Create a new caller actor
    ///
    /// # Arguments
    ///
    /// * `engine` - Engine to own; usually fresh
    /// * `capacity` - Inbox capacity (clamped to at least 1)
    ///
    /// # Returns
    ///
    /// * `(CallerActor, CallerHandle)` - Actor and handle for sending messages
    pub fn new(engine: GameEngine, capacity: usize) -> (Self, CallerHandle) {
        let (sender, inbox) = mpsc::channel(capacity.max(1));

        let actor = Self {
            engine,
            inbox,
            is_closed: false,
        };

        (actor, CallerHandle::new(sender))
    }

    /// Create the actor and spawn it on the current Tokio runtime
    pub fn spawn(engine: GameEngine, capacity: usize) -> CallerHandle {
        let (actor, handle) = Self::new(engine, capacity);
        tokio::spawn(actor.run());
        handle
    }

    /// Run the caller event loop
    pub async fn run(mut self) {
        log::info!("Caller starting");

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);

            if self.is_closed {
                break;
            }
        }

        log::info!("Caller stopped");
    }

    fn handle_message(&mut self, message: CallerMessage) {
        let operation = message.operation();
        log::trace!("Caller handling {operation}");

        match message {
            CallerMessage::Start { variant, response } => {
                let _ = response.send(self.engine.start(variant));
            }

            CallerMessage::Draw { response } => {
                let result = self.engine.draw();
                log_rejection(operation, &result);
                let _ = response.send(result);
            }

            CallerMessage::Status { response } => {
                let result = self.engine.status();
                log_rejection(operation, &result);
                let _ = response.send(result);
            }

            CallerMessage::Reset { response } => {
                let result = self.engine.reset();
                log_rejection(operation, &result);
                let _ = response.send(result);
            }

            CallerMessage::Shutdown => {
                self.is_closed = true;
            }
        }
    }
}

fn log_rejection<T>(operation: &str, result: &Result<T, GameError>) {
    if let Err(e) = result {
        log::warn!("Caller rejected {operation}: {e}");
    }
}
