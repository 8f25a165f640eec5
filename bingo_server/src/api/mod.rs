//! HTTP API for the bingo server.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework
//! - **Tower**: Middleware stacking, CORS
//! - **Actor Model**: The game is owned by a single caller task; handlers only
//!   hold a [`CallerHandle`]
//!
//! # Modules
//!
//! - [`game`]: Game operations (new, draw, status, reset)
//! - [`request_id`]: Request correlation and HTTP metrics
//!
//! # Endpoints
//!
//! ```text
//! GET  /                  - Welcome banner
//! GET  /health            - Health check
//! POST /api/game/new      - Start a game ({"type": "americano" | "britanico" | "keno"})
//! POST /api/game/draw     - Draw the next number / Keno round
//! GET  /api/game/status   - Current game snapshot
//! POST /api/game/reset    - Restart the active variant
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use bingo::{CallerActor, GameEngine};
//! use bingo_server::api::{create_router, AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let caller = CallerActor::spawn(GameEngine::new(), 100);
//! let app = create_router(AppState { caller });
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is permissive: the game board is typically served from another origin.

pub mod game;
pub mod request_id;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use bingo::CallerHandle;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Banner served at `/`
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Bingo backend! Use /api/game for game operations.";

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the handle is a cheap channel sender.
#[derive(Clone)]
pub struct AppState {
    pub caller: CallerHandle,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let game_routes = Router::new()
        .route("/game/new", post(game::new_game))
        .route("/game/draw", post(game::draw_number))
        .route("/game/status", get(game::game_status))
        .route("/game/reset", post(game::reset_game));

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .nest("/api", game_routes)
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(request_id::request_id_middleware)),
        )
        .with_state(state)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check endpoint for monitoring and load balancers.
///
/// Returns `200 OK` while the caller actor is running, `503 Service
/// Unavailable` once it has stopped.
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"healthy","version":"0.1.0","caller":true,"timestamp":"2026-10-17T10:30:00Z"}
/// ```
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let caller_healthy = !state.caller.is_closed();

    let status_code = if caller_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = json!({
        "status": if caller_healthy { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "caller": caller_healthy,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status_code, Json(response))
}
