//! Game operations: start, draw, status and reset.

use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};

use super::{
    entities::GameVariant,
    errors::{GameError, GameResult},
    rules::{DrawRules, VariantRules},
    state::GameState,
    views::{DrawOutcome, GameSnapshot, StatusSnapshot},
};

/// Owns one game's state and the RNG used to draw from it.
///
/// Every operation validates before mutating, so a rejected call leaves the
/// state untouched. Independent engines share nothing.
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    rng: StdRng,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with a reproducible draw sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn variant(&self) -> Option<GameVariant> {
        self.state.variant
    }

    /// Start a new game, discarding whatever was in progress.
    pub fn start(&mut self, variant: GameVariant) -> GameSnapshot {
        if let Some(previous) = self.state.variant {
            info!("Replacing {previous} game with a new {variant} game");
        } else {
            info!("Starting {variant} game");
        }
        self.state = GameState::fresh(variant);
        GameSnapshot::new(variant, &self.state)
    }

    /// Start a game from a variant name such as `"americano"` or `"KENO"`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidVariant`] if the name is not recognized.
    pub fn start_named(&mut self, name: &str) -> GameResult<GameSnapshot> {
        let variant = name.parse::<GameVariant>().inspect_err(|e| warn!("{e}"))?;
        Ok(self.start(variant))
    }

    /// Draw the next number (traditional) or a new round (Keno).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game was started.
    pub fn draw(&mut self) -> GameResult<DrawOutcome> {
        let rules = self.rules()?;
        Ok(rules.draw(&mut self.state, &mut self.rng))
    }

    /// Snapshot of the current game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game was started.
    pub fn status(&self) -> GameResult<StatusSnapshot> {
        Ok(self.rules()?.status(&self.state))
    }

    /// Restart the active variant from a full pool.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no game was started.
    pub fn reset(&mut self) -> GameResult<GameSnapshot> {
        let variant = self.state.variant.ok_or(GameError::NoActiveGame)?;
        info!("Resetting {variant} game");
        self.state = GameState::fresh(variant);
        Ok(GameSnapshot::new(variant, &self.state))
    }

    fn rules(&self) -> GameResult<DrawRules> {
        self.state
            .variant
            .map(DrawRules::from)
            .ok_or(GameError::NoActiveGame)
    }
}
