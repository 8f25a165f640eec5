//! # Bingo
//!
//! A number-bingo game engine covering the three classic variants:
//!
//! - **American**: 75 balls, each tagged with a letter of B-I-N-G-O
//! - **British**: 90 balls, no letters
//! - **Keno**: 80 balls, drawn 20 at a time in independent rounds
//!
//! ## Architecture
//!
//! The game is a small state machine. [`GameEngine`] owns a [`GameState`]
//! and a seedable RNG, and exposes `start`, `draw`, `status` and `reset`.
//! Variant-specific behavior lives in [`game::rules`], dispatched through a
//! single tagged union keyed on the variant.
//!
//! The [`caller`] module wraps one engine in an async actor so a multi-threaded
//! host (such as the HTTP server) can share it while operations stay strictly
//! one-at-a-time.
//!
//! ## Example
//!
//! ```
//! use bingo::{DrawOutcome, GameEngine, GameVariant};
//!
//! let mut engine = GameEngine::with_seed(42);
//! let snapshot = engine.start(GameVariant::American);
//! assert_eq!(snapshot.numbers.len(), 75);
//!
//! match engine.draw().unwrap() {
//!     DrawOutcome::Number(drawn) => assert!(drawn.drawn_letter.is_some()),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

/// Async actor serializing access to a single game.
pub mod caller;

/// Core game logic, entities and draw rules.
pub mod game;

pub use caller::{CallerActor, CallerError, CallerHandle};
pub use game::{
    GameEngine, GameError, GameState,
    entities::{self, Ball, CurrentNumber, GameVariant, Letter, NumberEntry},
    views::{
        DrawOutcome, GameSnapshot, KenoRoundDrawn, KenoStatus, NumberDrawn, PoolExhausted,
        StatusSnapshot, TraditionalStatus,
    },
};
