//! Game state snapshot: the complete visible state handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::ImageRef;

/// Complete renderable state, produced after every transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub phase: GamePhase,
    /// Prompt of the active question. `None` once the game is over.
    pub prompt: Option<String>,
    pub question_index: usize,
    pub questions_left: usize,
    pub correct_count: u32,
    pub total: u32,
    pub seconds_remaining: u32,
    pub round_duration_secs: u32,
    /// Fraction of the round left, 1.0 at the start of a round.
    pub progress: f64,
    pub cells: Vec<CellView>,
    /// Events raised since the previous snapshot, oldest first.
    pub events: Vec<GameEvent>,
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: usize,
    pub answer_id: u32,
    pub value: String,
    pub image: ImageRef,
    /// Resolved by a correct tap; no longer tappable.
    pub answered: bool,
}

impl GameStateSnapshot {
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Grid rows of `columns` cells each, in cell order.
    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(columns.max(1))
    }
}
