use serde::{Deserialize, Serialize};

/// A single endgame study extracted from the PGN database.
///
/// `fen` and `result` are always non-empty; the remaining headers fall back
/// to defaults when the source block omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    pub event: String,
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2" (not validated)
    pub fen: String,
    pub date: String,
}
