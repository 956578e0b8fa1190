//! In-memory store of endgame positions.
//!
//! Built once at startup from a single PGN file and read-only afterwards,
//! so handlers can share it through an `Arc` without any locking.

use std::fs;
use std::path::Path;

use anyhow::Context;
use rand::Rng;

use endgame_core::pgn;
use endgame_core::position::PositionRecord;

#[derive(Debug, Default)]
pub struct PositionStore {
    positions: Vec<PositionRecord>,
}

impl PositionStore {
    pub fn new(positions: Vec<PositionRecord>) -> Self {
        Self { positions }
    }

    /// Read and parse the PGN database at `path`. Malformed game blocks
    /// are dropped by the parser; only the file read itself can fail.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Self::new(pgn::parse(&content)))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pick a uniformly random position, or `None` when nothing is loaded.
    /// Repeats across calls are expected; there is no session memory.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&PositionRecord> {
        if self.positions.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.positions.len());
        Some(&self.positions[index])
    }
}
