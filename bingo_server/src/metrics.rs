//! Prometheus metrics for the bingo server.
//!
//! Metrics are exposed in Prometheus text format by a dedicated listener when
//! `METRICS_BIND` (or `--metrics-bind`) is configured. Without an installed
//! recorder every call here is a no-op.
//!
//! # Metrics
//!
//! - `http_requests_total{method,path,status}` (`path` is the route template)
//! - `http_request_duration_ms{method,path}`
//! - `games_started_total{variant}`
//! - `numbers_drawn_total{variant}`
//! - `keno_rounds_total`
//! - `games_finished_total{variant}`

use bingo::{DrawOutcome, GameVariant};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Initialize Prometheus metrics exporter.
///
/// Metrics will be available at `http://<addr>/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {}", e))
}

// ============================================================================
// HTTP Metrics
// ============================================================================

/// Record HTTP request.
pub fn http_requests_total(method: &str, path: &str, status: u16) {
    metrics::counter!("http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record HTTP request duration in milliseconds.
pub fn http_request_duration_ms(method: &str, path: &str, duration_ms: f64) {
    metrics::histogram!("http_request_duration_ms",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(duration_ms);
}

// ============================================================================
// Game Metrics
// ============================================================================

/// Record a game start or reset.
pub fn game_started(variant: GameVariant) {
    metrics::counter!("games_started_total", "variant" => variant.to_string()).increment(1);
}

/// Record the result of a draw.
///
/// A game counts as finished on the draw that empties its pool. Draws after
/// that only repeat the final state and are not counted again.
pub fn draw_recorded(variant: GameVariant, outcome: &DrawOutcome) {
    match outcome {
        DrawOutcome::Number(drawn) => {
            metrics::counter!("numbers_drawn_total", "variant" => variant.to_string())
                .increment(1);
            if drawn.status.remaining == 0 {
                metrics::counter!("games_finished_total", "variant" => variant.to_string())
                    .increment(1);
            }
        }
        DrawOutcome::KenoRound(round) => {
            metrics::counter!("keno_rounds_total").increment(1);
            metrics::counter!("numbers_drawn_total", "variant" => variant.to_string())
                .increment(round.drawn_keno_numbers.len() as u64);
        }
        DrawOutcome::Exhausted(_) => {}
    }
}
