use reqwest::Client;
use serde_json::Value;

const CLOUD_EVAL_URL: &str = "https://lichess.org/api/cloud-eval";

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Upstream answered with a non-success status, typically because no
    /// cloud evaluation exists for the position.
    #[error("no evaluation available")]
    Unavailable,

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct LichessClient {
    client: Client,
}

impl LichessClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("EndgameQuiz/1.0")
            .build()
            .unwrap();
        Self { client }
    }

    /// Fetch the Lichess cloud evaluation for a FEN and return the raw
    /// JSON body. The body is relayed verbatim; nothing is interpreted.
    pub async fn cloud_eval(&self, fen: &str) -> Result<Value, EvalError> {
        let resp = self
            .client
            .get(CLOUD_EVAL_URL)
            .query(&[("fen", fen), ("multiPv", "1")])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(EvalError::Unavailable);
        }

        Ok(resp.json().await?)
    }
}
