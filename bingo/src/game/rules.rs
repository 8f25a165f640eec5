//! Variant-specific draw and status rules.
//!
//! American and British games call one number at a time from a shrinking
//! pool; Keno re-draws a full round of 20 each time. [`DrawRules`] is the
//! single dispatch point keyed on the variant, so the engine never branches
//! on the variant itself.

use enum_dispatch::enum_dispatch;
use log::{debug, info};
use rand::{Rng, RngCore, seq::index};

use super::{
    entities::{Ball, CurrentNumber, GameVariant, KENO_ROUND_SIZE},
    state::GameState,
    views::{
        ALL_DRAWN_MESSAGE, DrawOutcome, KENO_ROUND_MESSAGE, KenoRoundDrawn, KenoStatus,
        NumberDrawn, PoolExhausted, StatusSnapshot, TraditionalStatus,
    },
};

#[enum_dispatch]
pub trait VariantRules {
    /// Draw the next number(s) and update `state`.
    fn draw(&self, state: &mut GameState, rng: &mut dyn RngCore) -> DrawOutcome;

    /// Read-only snapshot of `state`, shaped for the variant.
    #[must_use]
    fn status(&self, state: &GameState) -> StatusSnapshot;
}

/// Rules shared by American and British games.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TraditionalRules {
    variant: GameVariant,
}

/// Rules for Keno rounds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KenoRules;

#[enum_dispatch(VariantRules)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawRules {
    Traditional(TraditionalRules),
    Keno(KenoRules),
}

impl From<GameVariant> for DrawRules {
    fn from(variant: GameVariant) -> Self {
        match variant {
            GameVariant::American | GameVariant::British => {
                TraditionalRules { variant }.into()
            }
            GameVariant::Keno => KenoRules.into(),
        }
    }
}

impl TraditionalRules {
    fn snapshot(&self, state: &GameState) -> TraditionalStatus {
        TraditionalStatus::new(self.variant, state)
    }
}

impl VariantRules for TraditionalRules {
    fn draw(&self, state: &mut GameState, rng: &mut dyn RngCore) -> DrawOutcome {
        let undrawn: Vec<usize> = state
            .numbers
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.drawn)
            .map(|(idx, _)| idx)
            .collect();

        if undrawn.is_empty() {
            info!(
                "{} game exhausted after {} draws",
                self.variant,
                state.drawn_history.len()
            );
            return DrawOutcome::Exhausted(PoolExhausted {
                message: ALL_DRAWN_MESSAGE.to_string(),
                finished: true,
                status: self.snapshot(state),
            });
        }

        let idx = undrawn[rng.random_range(0..undrawn.len())];
        let entry = &mut state.numbers[idx];
        entry.drawn = true;
        let called = CurrentNumber {
            number: entry.number,
            letter: entry.letter,
        };

        state.drawn_history.push(called.number);
        state.current = Some(called);
        state.push_recent(called.number);

        debug!(
            "{} draw #{}: {called} ({} left)",
            self.variant,
            state.drawn_history.len(),
            undrawn.len() - 1
        );

        DrawOutcome::Number(NumberDrawn {
            drawn_number: called.number,
            drawn_letter: called.letter,
            status: self.snapshot(state),
        })
    }

    fn status(&self, state: &GameState) -> StatusSnapshot {
        StatusSnapshot::Traditional(self.snapshot(state))
    }
}

impl VariantRules for KenoRules {
    fn draw(&self, state: &mut GameState, rng: &mut dyn RngCore) -> DrawOutcome {
        let pool = state.numbers.len();
        let size = KENO_ROUND_SIZE.min(pool);
        let mut round: Vec<Ball> = index::sample(rng, pool, size)
            .into_iter()
            .filter_map(|idx| Ball::try_from(idx + 1).ok())
            .collect();
        debug_assert_eq!(round.len(), size, "every pool index must fit in a ball");
        round.sort_unstable();

        // Each round stands alone: wipe the previous one before marking.
        state.clear_drawn();
        for &number in &round {
            if let Some(entry) = state.entry_mut(number) {
                entry.drawn = true;
            }
        }

        state.keno_round = round.clone();
        state.drawn_history = round.clone();
        state.current = None;
        state.recent_three.clear();

        debug!("keno round drawn: {round:?}");

        DrawOutcome::KenoRound(KenoRoundDrawn {
            message: KENO_ROUND_MESSAGE.to_string(),
            drawn_keno_numbers: round,
            status: KenoStatus::new(state),
        })
    }

    fn status(&self, state: &GameState) -> StatusSnapshot {
        StatusSnapshot::Keno(KenoStatus::new(state))
    }
}
