//! Game engine: the stateful wrapper the presentation layer talks to.
//!
//! `GameEngine` owns the deck, the current `GameState` and the shuffle RNG,
//! applies player commands and clock ticks through `rules`, buffers the
//! emitted events, and produces `GameStateSnapshot`s. Completely headless
//! (no clock or thread of its own), so every transition is testable.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use bingo_core::commands::PlayerCommand;
use bingo_core::enums::GamePhase;
use bingo_core::events::GameEvent;
use bingo_core::state::{CellView, GameStateSnapshot};
use bingo_core::BingoResult;

use crate::config::GameConfig;
use crate::deck::Deck;
use crate::rules::{self, GameState, Transition};

/// The game engine. Owns the deck and all game state.
pub struct GameEngine {
    config: GameConfig,
    /// Deck as configured, before any shuffle.
    source_deck: Deck,
    /// Deck of the game in progress.
    deck: Deck,
    state: GameState,
    rng: ChaCha8Rng,
    pending_events: Vec<GameEvent>,
    games_started: u32,
}

impl GameEngine {
    /// Create an engine and start the first game.
    ///
    /// Fails with `InvalidConfig` for an empty deck or a zero round duration.
    pub fn new(config: GameConfig, deck: Deck) -> BingoResult<Self> {
        let state = rules::initialize(deck.entries(), config.round_duration_secs)?;
        let mut engine = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            source_deck: deck.clone(),
            deck,
            state,
            config,
            pending_events: Vec::new(),
            games_started: 0,
        };
        engine.start_game();
        Ok(engine)
    }

    /// Create an engine from config alone, loading `deck_path` if set and
    /// falling back to the bundled sample deck.
    pub fn from_config(config: GameConfig) -> BingoResult<Self> {
        let deck = match &config.deck_path {
            Some(path) => Deck::load(path)?,
            None => Deck::sample(),
        };
        Self::new(config, deck)
    }

    /// Apply one player command. Returns the events it raised.
    pub fn apply(&mut self, command: PlayerCommand) -> Vec<GameEvent> {
        match command {
            PlayerCommand::SelectCell { index } => self.select_cell(index),
            PlayerCommand::Skip => self.skip(),
            PlayerCommand::NewGame => {
                self.start_game();
                Vec::new()
            }
        }
    }

    pub fn select_cell(&mut self, index: usize) -> Vec<GameEvent> {
        let transition = rules::select_cell(self.deck.entries(), &self.state, index);
        self.commit(transition)
    }

    pub fn skip(&mut self) -> Vec<GameEvent> {
        let transition = rules::skip(&self.state);
        self.commit(transition)
    }

    /// One elapsed second of clock.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let transition = rules::tick(&self.state);
        self.commit(transition)
    }

    /// Snapshot of the current state, draining events buffered since the
    /// previous snapshot.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.pending_events);
        build_snapshot(&self.deck, &self.state, events)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Number of games started on this engine, including the first.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Re-deal (shuffling if configured) and reset all game state.
    fn start_game(&mut self) {
        self.deck = if self.config.shuffle {
            self.source_deck.shuffled(&mut self.rng)
        } else {
            self.source_deck.clone()
        };
        // Deck and duration were validated in `new`.
        if let Ok(state) = rules::initialize(self.deck.entries(), self.config.round_duration_secs) {
            self.state = state;
        }
        self.pending_events.clear();
        self.games_started += 1;
        info!(
            game = self.games_started,
            questions = self.deck.len(),
            round_secs = self.config.round_duration_secs,
            "new game"
        );
    }

    fn commit(&mut self, transition: Transition) -> Vec<GameEvent> {
        let Transition { state, events } = transition;
        self.state = state;
        for event in &events {
            if let GameEvent::GameOver {
                correct_count,
                total,
            } = event
            {
                info!(correct_count, total, "game over");
            }
        }
        self.pending_events.extend(events.iter().copied());
        events
    }
}

/// Build the renderable view of a game.
pub fn build_snapshot(deck: &Deck, state: &GameState, events: Vec<GameEvent>) -> GameStateSnapshot {
    let cells = deck
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| CellView {
            index,
            answer_id: entry.answer.id,
            value: entry.answer.value.clone(),
            image: entry.answer.image.clone(),
            answered: state.is_answered(index),
        })
        .collect();

    GameStateSnapshot {
        phase: state.phase(),
        prompt: deck
            .entries()
            .get(state.current_question_index())
            .map(|entry| entry.question.clone()),
        question_index: state.current_question_index(),
        questions_left: state.questions_left(),
        correct_count: state.correct_count(),
        total: state.question_count() as u32,
        seconds_remaining: state.seconds_remaining(),
        round_duration_secs: state.round_duration_secs(),
        progress: state.progress(),
        cells,
        events,
    }
}
