//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Game phase. `GameOver` is terminal until a new game is started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Result of comparing a tapped cell against the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}
