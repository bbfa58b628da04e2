//! Game configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use bingo_core::constants::{DEFAULT_SEED, ROUND_DURATION_SECS};
use bingo_core::BingoResult;

/// Configuration for a game session. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds per question before it is skipped automatically.
    pub round_duration_secs: u32,
    /// Shuffle the deck at the start of every game.
    pub shuffle: bool,
    /// RNG seed for shuffling. Same seed = same sequence of decks.
    pub seed: u64,
    /// JSON deck to play instead of the bundled sample.
    pub deck_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: ROUND_DURATION_SECS,
            shuffle: false,
            seed: DEFAULT_SEED,
            deck_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> BingoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> BingoResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
