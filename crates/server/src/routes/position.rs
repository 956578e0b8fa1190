use std::sync::Arc;

use axum::{Extension, Json};
use serde::Serialize;

use endgame_core::position::PositionRecord;

use crate::error::AppError;
use crate::store::PositionStore;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub fen: String,
    pub side_to_move: String,
    pub correct_answer: String,
    pub event: String,
    pub white: String,
    pub date: String,
    pub lichess_url: String,
}

impl PositionResponse {
    pub fn from_record(record: &PositionRecord) -> Self {
        Self {
            fen: record.fen.clone(),
            side_to_move: side_to_move(&record.fen).to_string(),
            correct_answer: correct_answer(&record.result).to_string(),
            event: record.event.clone(),
            white: record.white.clone(),
            date: record.date.clone(),
            lichess_url: analysis_url(&record.fen),
        }
    }
}

/// Side to move from the second space-delimited field of the FEN. Anything
/// other than an exact "w" counts as black; the FEN is not validated beyond
/// that.
fn side_to_move(fen: &str) -> &'static str {
    if fen.split(' ').nth(1) == Some("w") {
        "white"
    } else {
        "black"
    }
}

/// Quiz answer for a game result. Unrecognized result strings fall through
/// to "draw" rather than erroring.
fn correct_answer(result: &str) -> &'static str {
    match result {
        "1-0" => "white",
        "0-1" => "black",
        _ => "draw",
    }
}

/// Lichess analysis link for a FEN. Spaces become underscores; no other
/// characters are escaped.
fn analysis_url(fen: &str) -> String {
    format!("https://lichess.org/analysis/{}", fen.replace(' ', "_"))
}

/// GET /api/position
pub async fn get_position(
    Extension(store): Extension<Arc<PositionStore>>,
) -> Result<Json<PositionResponse>, AppError> {
    let record = store
        .pick(&mut rand::thread_rng())
        .ok_or_else(|| AppError::Internal("No positions loaded".to_string()))?;

    Ok(Json(PositionResponse::from_record(record)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KING_FEN: &str = "8/8/8/8/8/8/8/K6k w - - 0 1";

    fn record(result: &str, fen: &str) -> PositionRecord {
        PositionRecord {
            event: "Test".to_string(),
            white: "A".to_string(),
            black: "B".to_string(),
            result: result.to_string(),
            fen: fen.to_string(),
            date: "1924".to_string(),
        }
    }

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(KING_FEN), "white");
        assert_eq!(side_to_move("8/8/8/8/8/8/8/K6k b - - 0 1"), "black");
        // Missing or malformed second field counts as black.
        assert_eq!(side_to_move("8/8/8/8/8/8/8/K6k"), "black");
        assert_eq!(side_to_move("8/8/8/8/8/8/8/K6k W - - 0 1"), "black");
    }

    #[test]
    fn test_correct_answer() {
        assert_eq!(correct_answer("1-0"), "white");
        assert_eq!(correct_answer("0-1"), "black");
        assert_eq!(correct_answer("1/2-1/2"), "draw");
        assert_eq!(correct_answer("*"), "draw");
        assert_eq!(correct_answer("garbage"), "draw");
    }

    #[test]
    fn test_analysis_url() {
        assert_eq!(
            analysis_url(KING_FEN),
            "https://lichess.org/analysis/8/8/8/8/8/8/8/K6k_w_-_-_0_1"
        );
    }

    #[test]
    fn test_response_from_record() {
        let response = PositionResponse::from_record(&record("1-0", KING_FEN));
        assert_eq!(response.fen, KING_FEN);
        assert_eq!(response.side_to_move, "white");
        assert_eq!(response.correct_answer, "white");
        assert_eq!(response.event, "Test");
        assert_eq!(response.white, "A");
        assert_eq!(response.date, "1924");
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let json =
            serde_json::to_value(PositionResponse::from_record(&record("0-1", KING_FEN)))
                .unwrap();
        assert_eq!(json["sideToMove"], "white");
        assert_eq!(json["correctAnswer"], "black");
        assert!(json["lichessUrl"]
            .as_str()
            .unwrap()
            .starts_with("https://lichess.org/analysis/"));
    }

    #[tokio::test]
    async fn test_empty_store_is_a_server_error() {
        let store = Arc::new(PositionStore::default());
        let err = get_position(Extension(store)).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_populated_store_returns_a_position() {
        let store = Arc::new(PositionStore::new(vec![record("1/2-1/2", KING_FEN)]));
        let Json(response) = get_position(Extension(store)).await.unwrap();
        assert_eq!(response.correct_answer, "draw");
    }
}
