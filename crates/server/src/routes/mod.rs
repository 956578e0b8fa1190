pub mod eval;
pub mod health;
pub mod position;
