//! Player commands sent from the presentation layer to the engine.
//!
//! Commands are applied in arrival order, one at a time.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Tap a grid cell, answering the current question with that cell's answer.
    SelectCell { index: usize },
    /// Move on to the next question without answering.
    Skip,
    /// Throw away the current game and start over.
    NewGame,
}
