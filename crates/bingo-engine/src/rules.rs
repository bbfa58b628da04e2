//! Game rules: the question/score/countdown state machine.
//!
//! Pure functions over plain data: each takes the current `GameState` and
//! returns the successor together with the events the transition raised.
//! No clock, no I/O. Once the game is over every transition is a no-op.

use tracing::{debug, warn};

use bingo_core::enums::{GamePhase, Verdict};
use bingo_core::events::GameEvent;
use bingo_core::types::QuestionEntry;
use bingo_core::{BingoError, BingoResult};

/// Question sequence, score, per-cell answered flags and countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    current_question_index: usize,
    correct_count: u32,
    answered_mask: Vec<bool>,
    seconds_remaining: u32,
    round_duration_secs: u32,
}

/// Output of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            events: Vec::new(),
        }
    }
}

impl GameState {
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn answered_mask(&self) -> &[bool] {
        &self.answered_mask
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn round_duration_secs(&self) -> u32 {
        self.round_duration_secs
    }

    /// Number of questions (and cells) in play.
    pub fn question_count(&self) -> usize {
        self.answered_mask.len()
    }

    pub fn is_over(&self) -> bool {
        self.current_question_index >= self.answered_mask.len()
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_over() {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn questions_left(&self) -> usize {
        self.question_count()
            .saturating_sub(self.current_question_index)
    }

    /// Fraction of the current round still on the clock, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.seconds_remaining as f64 / self.round_duration_secs as f64
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.answered_mask.get(index).copied().unwrap_or(false)
    }
}

/// Fresh state for a deck: first question, zero score, nothing answered,
/// full clock.
pub fn initialize(questions: &[QuestionEntry], round_duration_secs: u32) -> BingoResult<GameState> {
    if questions.is_empty() {
        return Err(BingoError::InvalidConfig("question deck is empty".into()));
    }
    if round_duration_secs == 0 {
        return Err(BingoError::InvalidConfig(
            "round duration must be at least one second".into(),
        ));
    }
    Ok(GameState {
        current_question_index: 0,
        correct_count: 0,
        answered_mask: vec![false; questions.len()],
        seconds_remaining: round_duration_secs,
        round_duration_secs,
    })
}

/// Compare cell `index` against the active question. Both must be in range.
fn judge(questions: &[QuestionEntry], state: &GameState, index: usize) -> Verdict {
    let current = &questions[state.current_question_index].answer;
    if questions[index].answer.matches(current) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

/// The player taps cell `index`.
///
/// Ignored when the game is over, the index is off the board, or the cell is
/// already answered. Otherwise a match marks the cell and scores a point; a
/// miss leaves the cell open. Either way the game moves to the next question.
pub fn select_cell(questions: &[QuestionEntry], state: &GameState, index: usize) -> Transition {
    if state.is_over() {
        return Transition::unchanged(state);
    }
    if questions.len() != state.question_count() {
        warn!(
            deck = questions.len(),
            cells = state.question_count(),
            "deck does not match game state, tap ignored"
        );
        return Transition::unchanged(state);
    }
    if index >= state.question_count() {
        warn!(index, cells = state.question_count(), "tap outside the board ignored");
        return Transition::unchanged(state);
    }
    if state.answered_mask[index] {
        debug!(index, "tap on answered cell ignored");
        return Transition::unchanged(state);
    }

    let mut next = state.clone();
    let mut events = Vec::with_capacity(2);

    match judge(questions, state, index) {
        Verdict::Correct => {
            next.answered_mask[index] = true;
            next.correct_count += 1;
            debug!(index, question = state.current_question_index, "correct");
            events.push(GameEvent::Correct { cell: index });
        }
        Verdict::Incorrect => {
            debug!(index, question = state.current_question_index, "incorrect");
            events.push(GameEvent::Incorrect { cell: index });
        }
    }

    advance(&mut next, &mut events);
    Transition { state: next, events }
}

/// Move on without answering.
pub fn skip(state: &GameState) -> Transition {
    if state.is_over() {
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    let mut events = Vec::new();
    advance(&mut next, &mut events);
    Transition { state: next, events }
}

/// One second of clock. When the countdown runs out the question is skipped
/// and the countdown starts over.
pub fn tick(state: &GameState) -> Transition {
    if state.is_over() {
        return Transition::unchanged(state);
    }
    let mut next = state.clone();
    let mut events = Vec::new();
    next.seconds_remaining = next.seconds_remaining.saturating_sub(1);
    if next.seconds_remaining == 0 {
        debug!(question = next.current_question_index, "time up");
        advance(&mut next, &mut events);
    }
    Transition { state: next, events }
}

/// Next question, full clock. Raises `GameOver` on passing the last question.
fn advance(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.current_question_index += 1;
    state.seconds_remaining = state.round_duration_secs;
    debug!(question = state.current_question_index, "advance");

    if state.is_over() {
        events.push(GameEvent::GameOver {
            correct_count: state.correct_count,
            total: state.question_count() as u32,
        });
    }
}
