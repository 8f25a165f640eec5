//! Bingo game engine - state record, variant rules and operations.
//!
//! This module provides:
//! - Variant, letter and number-entry entities
//! - The per-game state record
//! - Draw rules for traditional (American/British) and Keno games
//! - The engine that applies them

pub mod engine;
pub mod entities;
pub mod errors;
pub mod rules;
pub mod state;
pub mod views;

pub use engine::GameEngine;
pub use errors::GameError;
pub use state::GameState;
