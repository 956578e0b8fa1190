pub mod pgn;
pub mod position;
