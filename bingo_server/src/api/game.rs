//! Game API handlers.
//!
//! Thin adapters between HTTP and the caller actor:
//! - Starting a game of a given variant
//! - Drawing the next number (or Keno round)
//! - Reading the current status
//! - Resetting the active game
//!
//! # Examples
//!
//! Start an American game:
//! ```bash
//! curl -X POST http://localhost:3000/api/game/new \
//!   -H "Content-Type: application/json" \
//!   -d '{"type": "americano"}'
//! ```
//!
//! Draw:
//! ```bash
//! curl -X POST http://localhost:3000/api/game/draw
//! ```

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use bingo::{
    CallerError, DrawOutcome, GameError, GameSnapshot, GameVariant, StatusSnapshot,
};
use serde::{Deserialize, Serialize};

use super::{AppState, request_id::RequestId};
use crate::{logging, metrics};

/// Body of `POST /api/game/new`
#[derive(Debug, Default, Deserialize)]
pub struct NewGameRequest {
    /// Variant name; clients send it as `type`
    #[serde(rename = "type", alias = "variant")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Map a caller failure to a status code.
///
/// Game rule violations are the client's fault (400); a stopped actor is ours.
fn api_error(request_id: &RequestId, operation: &str, err: CallerError) -> ApiError {
    let status = match err {
        CallerError::Game(_) => StatusCode::BAD_REQUEST,
        CallerError::Closed => StatusCode::INTERNAL_SERVER_ERROR,
    };
    logging::log_game_rejection(request_id.as_str(), operation, &err.to_string());
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Start a new game, replacing any game in progress.
///
/// # Request Body
///
/// ```json
/// {"type": "americano"}
/// ```
///
/// Accepted names (case-insensitive): `americano`/`american`,
/// `britanico`/`british`, `keno`.
///
/// # Response
///
/// Returns `200 OK` with the fresh game:
/// ```json
/// {
///   "variant": "american",
///   "numbers": [{"number": 1, "drawn": false, "letter": "B"}, "..."],
///   "drawnHistory": [],
///   "current": null,
///   "recentThree": [],
///   "kenoRound": []
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing, malformed or unknown game type
pub async fn new_game(
    State(state): State<AppState>,
    request_id: RequestId,
    body: Bytes,
) -> ApiResult<GameSnapshot> {
    // A missing or unreadable body is reported the same as an unknown type.
    let requested = serde_json::from_slice::<NewGameRequest>(&body)
        .unwrap_or_default()
        .kind
        .unwrap_or_default();

    let variant = requested
        .parse::<GameVariant>()
        .map_err(|e: GameError| api_error(&request_id, "start", e.into()))?;

    let snapshot = state
        .caller
        .start(variant)
        .await
        .map_err(|e| api_error(&request_id, "start", e))?;

    metrics::game_started(variant);
    logging::log_game_event("start", variant, "new game started");

    Ok(Json(snapshot))
}

/// Draw the next number, or a new round of 20 for Keno.
///
/// # Response
///
/// Returns `200 OK` with one of:
///
/// **American/British:**
/// ```json
/// {"drawnNumber": 7, "drawnLetter": "B", "variant": "american", "remaining": 74, "...": "..."}
/// ```
///
/// **Keno:**
/// ```json
/// {"message": "Keno round drawn", "drawnKenoNumbers": [3, 9, "..."], "kenoRound": [3, 9, "..."]}
/// ```
///
/// **Pool exhausted** (not an error, repeated calls return the same):
/// ```json
/// {"message": "All numbers have been drawn", "finished": true, "remaining": 0}
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: no game has been started
pub async fn draw_number(
    State(state): State<AppState>,
    request_id: RequestId,
) -> ApiResult<DrawOutcome> {
    let outcome = state
        .caller
        .draw()
        .await
        .map_err(|e| api_error(&request_id, "draw", e))?;

    let variant = match &outcome {
        DrawOutcome::Number(drawn) => drawn.status.variant,
        DrawOutcome::Exhausted(done) => done.status.variant,
        DrawOutcome::KenoRound(round) => round.status.variant,
    };
    metrics::draw_recorded(variant, &outcome);

    let detail = match &outcome {
        DrawOutcome::Number(drawn) => match drawn.drawn_letter {
            Some(letter) => format!("called {letter}-{}", drawn.drawn_number),
            None => format!("called {}", drawn.drawn_number),
        },
        DrawOutcome::Exhausted(done) => done.message.clone(),
        DrawOutcome::KenoRound(round) => format!("round {:?}", round.drawn_keno_numbers),
    };
    logging::log_game_event("draw", variant, &detail);

    Ok(Json(outcome))
}

/// Read-only snapshot of the active game.
///
/// Keno snapshots carry `kenoRound`; American/British snapshots carry
/// `current`, `recentThree` and `remaining` instead.
///
/// # Errors
///
/// - `400 Bad Request`: no game has been started
pub async fn game_status(
    State(state): State<AppState>,
    request_id: RequestId,
) -> ApiResult<StatusSnapshot> {
    state
        .caller
        .status()
        .await
        .map(Json)
        .map_err(|e| api_error(&request_id, "status", e))
}

/// Restart the active variant from a full pool.
///
/// Same response shape as [`new_game`].
///
/// # Errors
///
/// - `400 Bad Request`: no game has been started
pub async fn reset_game(
    State(state): State<AppState>,
    request_id: RequestId,
) -> ApiResult<GameSnapshot> {
    let snapshot = state
        .caller
        .reset()
        .await
        .map_err(|e| api_error(&request_id, "reset", e))?;

    metrics::game_started(snapshot.variant);
    logging::log_game_event("reset", snapshot.variant, "game reset");

    Ok(Json(snapshot))
}
