use axum::{extract::Query, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::clients::lichess::{EvalError, LichessClient};
use crate::error::AppError;

#[derive(Deserialize)]
pub struct EvalQuery {
    pub fen: Option<String>,
}

/// GET /api/eval?fen=<FEN>
///
/// Upstream failures are reported in the body rather than the status code:
/// callers always get a 200 with either the evaluation or an `error` field.
pub async fn get_eval(
    Extension(client): Extension<LichessClient>,
    Query(params): Query<EvalQuery>,
) -> Result<Json<Value>, AppError> {
    // An empty fen counts the same as an absent one.
    let fen = params
        .fen
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::BadRequest("FEN required".to_string()))?;

    match client.cloud_eval(&fen).await {
        Ok(eval) => Ok(Json(eval)),
        Err(EvalError::Unavailable) => Ok(Json(json!({ "error": "No evaluation available" }))),
        Err(EvalError::Request(e)) => {
            tracing::warn!("Cloud eval request failed: {e}");
            Ok(Json(json!({ "error": "Failed to fetch evaluation" })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_fen_is_a_client_error() {
        let client = LichessClient::new();
        let err = get_eval(Extension(client), Query(EvalQuery { fen: None }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_empty_fen_is_a_client_error() {
        let client = LichessClient::new();
        let err = get_eval(
            Extension(client),
            Query(EvalQuery {
                fen: Some(String::new()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
