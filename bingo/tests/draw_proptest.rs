/// Property-based tests for draw invariants using proptest
///
/// Seeds and draw counts are generated, so these cover many different
/// draw sequences rather than one hand-picked game.
use bingo::{DrawOutcome, GameEngine, GameVariant, entities::KENO_ROUND_SIZE};
use proptest::prelude::*;
use std::collections::HashSet;

fn traditional_variant() -> impl Strategy<Value = GameVariant> {
    prop_oneof![Just(GameVariant::American), Just(GameVariant::British)]
}

proptest! {
    #[test]
    fn test_traditional_draws_never_repeat(
        seed in any::<u64>(),
        variant in traditional_variant(),
        draws in 0usize..=90,
    ) {
        let mut engine = GameEngine::with_seed(seed);
        engine.start(variant);
        let draws = draws.min(variant.pool_size());

        let mut seen = HashSet::new();
        for _ in 0..draws {
            let outcome = engine.draw().unwrap();
            for number in outcome.drawn_numbers() {
                prop_assert!(seen.insert(number), "number {} drawn twice", number);
                prop_assert!(usize::from(number) <= variant.pool_size());
            }
        }

        prop_assert_eq!(engine.state().remaining(), variant.pool_size() - draws);
    }

    #[test]
    fn test_recent_three_is_tail_of_history(
        seed in any::<u64>(),
        variant in traditional_variant(),
        draws in 1usize..=20,
    ) {
        let mut engine = GameEngine::with_seed(seed);
        engine.start(variant);
        for _ in 0..draws {
            engine.draw().unwrap();
        }

        let history = engine.state().drawn_history();
        let recent = engine.state().recent_three();
        prop_assert!(recent.len() <= 3);
        prop_assert_eq!(recent.as_slice(), &history[history.len().saturating_sub(3)..]);
        prop_assert_eq!(
            engine.state().current().map(|c| c.number),
            history.last().copied()
        );
    }

    #[test]
    fn test_keno_round_invariants(seed in any::<u64>(), rounds in 1usize..=5) {
        let mut engine = GameEngine::with_seed(seed);
        engine.start(GameVariant::Keno);

        for _ in 0..rounds {
            let DrawOutcome::KenoRound(round) = engine.draw().unwrap() else {
                return Err(TestCaseError::fail("expected keno round"));
            };
            let numbers = &round.drawn_keno_numbers;
            prop_assert_eq!(numbers.len(), KENO_ROUND_SIZE);
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(numbers.iter().all(|n| (1..=80).contains(n)));
            prop_assert_eq!(engine.state().remaining(), 80 - KENO_ROUND_SIZE);
        }
    }

    #[test]
    fn test_reset_equals_fresh_start(
        seed in any::<u64>(),
        variant_idx in 0usize..3,
        draws in 0usize..30,
    ) {
        let variant = GameVariant::ALL[variant_idx];
        let mut engine = GameEngine::with_seed(seed);
        let fresh = engine.start(variant);
        for _ in 0..draws {
            engine.draw().unwrap();
        }

        prop_assert_eq!(engine.reset().unwrap(), fresh);
        prop_assert_eq!(engine.variant(), Some(variant));
    }
}
