//! Bingo server: one game per process, driven over HTTP.
//!
//! Spawns the caller actor that owns the game engine and serves the axum
//! router in front of it.

use anyhow::{Context, Error};
use bingo::{CallerActor, GameEngine};
use bingo_server::{
    api::{self, AppState},
    config::{CliOverrides, ServerConfig},
    logging, metrics,
};
use pico_args::Arguments;
use tracing::{error, info};

const HELP: &str = "\
Run a bingo caller server (American 75-ball, British 90-ball, Keno)

USAGE:
  bingo_server [OPTIONS]

OPTIONS:
  --bind          IP:PORT  Server socket bind address     [default: env SERVER_BIND, 0.0.0.0:$PORT or 127.0.0.1:3000]
  --metrics-bind  IP:PORT  Prometheus exporter address    [default: env METRICS_BIND, disabled if unset]
  --seed          N        Seed for reproducible draws    [default: env BINGO_RNG_SEED, OS entropy if unset]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  PORT                     Port to bind on all interfaces when SERVER_BIND is unset
  METRICS_BIND             Prometheus exporter address
  BINGO_RNG_SEED           RNG seed
  CALLER_INBOX_CAPACITY    Pending request capacity of the caller [default: 100]
  DEFAULT_VARIANT          Start a game of this variant at boot (americano, britanico, keno)
  RUST_LOG                 Log filter [default: info,hyper=warn,tower_http=warn]
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        bind: pargs.opt_value_from_str("--bind")?,
        metrics_bind: pargs.opt_value_from_str("--metrics-bind")?,
        seed: pargs.opt_value_from_str("--seed")?,
    };

    logging::init();

    let config = ServerConfig::from_env(overrides)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(Error::msg)?;
        info!("Prometheus metrics exposed at http://{}/metrics", addr);
    }

    let engine = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed RNG seed {}", seed);
            GameEngine::with_seed(seed)
        }
        None => GameEngine::new(),
    };
    let caller = CallerActor::spawn(engine, config.inbox_capacity);

    if let Some(variant) = config.default_variant {
        caller
            .start(variant)
            .await
            .context("Failed to start default game")?;
        metrics::game_started(variant);
        info!("Started default {} game", variant);
    }

    let app = api::create_router(AppState {
        caller: caller.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Bingo server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");
    caller.shutdown().await;

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}
