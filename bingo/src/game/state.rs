//! The mutable record of the current game.

use std::collections::VecDeque;

use super::entities::{Ball, CurrentNumber, GameVariant, NumberEntry, RECENT_CAPACITY};

/// Record of one game.
///
/// Only [`GameEngine`](super::GameEngine) mutates it. Invariants:
/// - `numbers` holds each ball of the variant's pool exactly once, ascending
/// - an entry is drawn iff its number is in `drawn_history`
///   (traditional) or `keno_round` (Keno)
/// - Keno games never have a `current` number or `recent_three`
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GameState {
    pub(crate) variant: Option<GameVariant>,
    pub(crate) numbers: Vec<NumberEntry>,
    pub(crate) drawn_history: Vec<Ball>,
    pub(crate) current: Option<CurrentNumber>,
    pub(crate) recent_three: VecDeque<Ball>,
    pub(crate) keno_round: Vec<Ball>,
}

impl GameState {
    /// Freshly initialized state for `variant`: full pool, nothing drawn.
    pub fn fresh(variant: GameVariant) -> Self {
        Self {
            variant: Some(variant),
            numbers: variant
                .pool()
                .map(|number| NumberEntry::new(variant, number))
                .collect(),
            drawn_history: Vec::new(),
            current: None,
            recent_three: VecDeque::with_capacity(RECENT_CAPACITY + 1),
            keno_round: Vec::new(),
        }
    }

    pub fn variant(&self) -> Option<GameVariant> {
        self.variant
    }

    pub fn is_active(&self) -> bool {
        self.variant.is_some()
    }

    pub fn numbers(&self) -> &[NumberEntry] {
        &self.numbers
    }

    pub fn drawn_history(&self) -> &[Ball] {
        &self.drawn_history
    }

    pub fn current(&self) -> Option<CurrentNumber> {
        self.current
    }

    pub fn recent_three(&self) -> Vec<Ball> {
        self.recent_three.iter().copied().collect()
    }

    pub fn keno_round(&self) -> &[Ball] {
        &self.keno_round
    }

    /// Count of entries not yet drawn.
    pub fn remaining(&self) -> usize {
        self.numbers.iter().filter(|entry| !entry.drawn).count()
    }

    /// Entry for `number`. Relies on `numbers` being the ascending pool from 1.
    pub(crate) fn entry_mut(&mut self, number: Ball) -> Option<&mut NumberEntry> {
        let idx = usize::from(number).checked_sub(1)?;
        self.numbers.get_mut(idx)
    }

    pub(crate) fn clear_drawn(&mut self) {
        for entry in &mut self.numbers {
            entry.drawn = false;
        }
    }

    /// Append to the recent window, evicting the oldest beyond capacity.
    pub(crate) fn push_recent(&mut self, number: Ball) {
        self.recent_three.push_back(number);
        while self.recent_three.len() > RECENT_CAPACITY {
            self.recent_three.pop_front();
        }
    }
}
