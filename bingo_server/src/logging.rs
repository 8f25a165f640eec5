//! Structured logging configuration.
//!
//! Server code logs through `tracing`; the `bingo` library logs through the
//! `log` facade, and those records are bridged into the same subscriber.

use bingo::GameVariant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,hyper=warn,tower_http=warn";

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use bingo_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a completed game operation with structured data
///
/// # Arguments
///
/// * `operation` - Operation name (start, draw, status, reset)
/// * `variant` - Variant of the game it applied to
/// * `detail` - Human-readable summary
///
/// # Example
///
/// ```
/// use bingo::GameVariant;
/// use bingo_server::logging::log_game_event;
///
/// log_game_event("draw", GameVariant::American, "B-7");
/// ```
pub fn log_game_event(operation: &str, variant: GameVariant, detail: &str) {
    tracing::info!(
        operation = operation,
        variant = %variant,
        "GAME: {}",
        detail
    );
}

/// Log a rejected game operation, correlated with its request
pub fn log_game_rejection(request_id: &str, operation: &str, reason: &str) {
    tracing::warn!(
        request_id = request_id,
        operation = operation,
        reason = reason,
        "Game operation rejected"
    );
}
