//! Serializable results of game operations.
//!
//! Field names follow the JSON contract consumed by browser clients
//! (`drawnHistory`, `recentThree`, ...), hence `camelCase` throughout.

use serde::Serialize;

use super::{
    entities::{Ball, CurrentNumber, GameVariant, Letter, NumberEntry},
    state::GameState,
};

/// Message returned when a traditional pool has been fully called.
pub const ALL_DRAWN_MESSAGE: &str = "All numbers have been drawn";

/// Message returned with every Keno round.
pub const KENO_ROUND_MESSAGE: &str = "Keno round drawn";

/// Full view of a freshly started (or reset) game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub variant: GameVariant,
    pub numbers: Vec<NumberEntry>,
    pub drawn_history: Vec<Ball>,
    pub current: Option<CurrentNumber>,
    pub recent_three: Vec<Ball>,
    pub keno_round: Vec<Ball>,
}

impl GameSnapshot {
    pub(crate) fn new(variant: GameVariant, state: &GameState) -> Self {
        Self {
            variant,
            numbers: state.numbers.clone(),
            drawn_history: state.drawn_history.clone(),
            current: state.current,
            recent_three: state.recent_three(),
            keno_round: state.keno_round.clone(),
        }
    }
}

/// Status of an American or British game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalStatus {
    pub variant: GameVariant,
    pub numbers: Vec<NumberEntry>,
    pub drawn_history: Vec<Ball>,
    pub current: Option<CurrentNumber>,
    pub recent_three: Vec<Ball>,
    pub remaining: usize,
}

impl TraditionalStatus {
    pub(crate) fn new(variant: GameVariant, state: &GameState) -> Self {
        Self {
            variant,
            numbers: state.numbers.clone(),
            drawn_history: state.drawn_history.clone(),
            current: state.current,
            recent_three: state.recent_three(),
            remaining: state.remaining(),
        }
    }
}

/// Status of a Keno game. No current number, no recent window.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KenoStatus {
    pub variant: GameVariant,
    pub numbers: Vec<NumberEntry>,
    pub drawn_history: Vec<Ball>,
    pub keno_round: Vec<Ball>,
}

impl KenoStatus {
    pub(crate) fn new(state: &GameState) -> Self {
        Self {
            variant: GameVariant::Keno,
            numbers: state.numbers.clone(),
            drawn_history: state.drawn_history.clone(),
            keno_round: state.keno_round.clone(),
        }
    }
}

/// Read-only snapshot shaped per variant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusSnapshot {
    Traditional(TraditionalStatus),
    Keno(KenoStatus),
}

impl StatusSnapshot {
    pub fn variant(&self) -> GameVariant {
        match self {
            Self::Traditional(status) => status.variant,
            Self::Keno(status) => status.variant,
        }
    }

    pub fn numbers(&self) -> &[NumberEntry] {
        match self {
            Self::Traditional(status) => &status.numbers,
            Self::Keno(status) => &status.numbers,
        }
    }
}

/// A single traditional number was called.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberDrawn {
    pub drawn_number: Ball,
    pub drawn_letter: Option<Letter>,
    #[serde(flatten)]
    pub status: TraditionalStatus,
}

/// Terminal result once a traditional pool is empty. Not an error.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolExhausted {
    pub message: String,
    pub finished: bool,
    #[serde(flatten)]
    pub status: TraditionalStatus,
}

/// A fresh Keno round of 20 numbers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KenoRoundDrawn {
    pub message: String,
    pub drawn_keno_numbers: Vec<Ball>,
    #[serde(flatten)]
    pub status: KenoStatus,
}

/// Result of a draw, one case per variant family plus the terminal case.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DrawOutcome {
    Number(NumberDrawn),
    Exhausted(PoolExhausted),
    KenoRound(KenoRoundDrawn),
}

impl DrawOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    /// Every number produced by this draw, in draw order (Keno: ascending).
    pub fn drawn_numbers(&self) -> Vec<Ball> {
        match self {
            Self::Number(drawn) => vec![drawn.drawn_number],
            Self::Exhausted(_) => Vec::new(),
            Self::KenoRound(round) => round.drawn_keno_numbers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_snapshot_json_shape() {
        let state = GameState::fresh(GameVariant::British);
        let value = serde_json::to_value(GameSnapshot::new(GameVariant::British, &state)).unwrap();

        assert_eq!(value["variant"], "british");
        assert_eq!(value["numbers"].as_array().unwrap().len(), 90);
        assert_eq!(value["current"], Value::Null);
        assert_eq!(value["recentThree"], json!([]));
        assert_eq!(value["kenoRound"], json!([]));
        assert_eq!(value["drawnHistory"], json!([]));
    }

    #[test]
    fn test_keno_status_omits_traditional_fields() {
        let state = GameState::fresh(GameVariant::Keno);
        let value = serde_json::to_value(StatusSnapshot::Keno(KenoStatus::new(&state))).unwrap();

        assert!(value.get("current").is_none());
        assert!(value.get("recentThree").is_none());
        assert_eq!(value["kenoRound"], json!([]));
    }

    #[test]
    fn test_traditional_status_omits_keno_round() {
        let state = GameState::fresh(GameVariant::American);
        let status = TraditionalStatus::new(GameVariant::American, &state);
        let value = serde_json::to_value(StatusSnapshot::Traditional(status)).unwrap();

        assert!(value.get("kenoRound").is_none());
        assert_eq!(value["remaining"], 75);
        assert_eq!(value["current"], Value::Null);
    }

    #[test]
    fn test_number_drawn_flattens_status() {
        let state = GameState::fresh(GameVariant::American);
        let outcome = DrawOutcome::Number(NumberDrawn {
            drawn_number: 12,
            drawn_letter: Some(Letter::B),
            status: TraditionalStatus::new(GameVariant::American, &state),
        });
        let value = serde_json::to_value(&outcome).unwrap();

        assert_eq!(value["drawnNumber"], 12);
        assert_eq!(value["drawnLetter"], "B");
        assert_eq!(value["variant"], "american");
        assert!(value.get("status").is_none());
        assert_eq!(outcome.drawn_numbers(), vec![12]);
    }
}
