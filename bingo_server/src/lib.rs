//! HTTP server hosting a single bingo game.
//!
//! The game itself lives in the [`bingo`] crate behind a caller actor; this
//! crate provides the axum routes, configuration, logging and metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
