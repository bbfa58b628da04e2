//! Events emitted by the engine for presentation feedback.

use serde::{Deserialize, Serialize};

/// Side-effect signals raised alongside a state transition.
///
/// The engine only reports what happened; shaking a cell, popping the crown,
/// or showing the summary banner is up to whoever consumes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The tapped cell matched the current question.
    Correct { cell: usize },
    /// The tapped cell did not match.
    Incorrect { cell: usize },
    /// The last question was passed.
    GameOver { correct_count: u32, total: u32 },
}

impl GameEvent {
    /// Summary line for the game-over banner, if this is a game-over event.
    pub fn summary(&self) -> Option<String> {
        match self {
            GameEvent::GameOver {
                correct_count,
                total,
            } => Some(format!(
                "You answered {} out of {} correctly.",
                correct_count, total
            )),
            _ => None,
        }
    }
}
