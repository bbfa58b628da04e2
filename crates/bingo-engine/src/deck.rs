//! Question decks: the bundled sample set, JSON loading, and seeded shuffles.

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use bingo_core::types::{Answer, QuestionEntry};
use bingo_core::BingoResult;

/// An ordered set of questions. Entry `i` is question `i` and cell `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    entries: Vec<QuestionEntry>,
}

impl Deck {
    pub fn new(entries: Vec<QuestionEntry>) -> Self {
        Self { entries }
    }

    /// Parse a JSON array of question entries.
    pub fn from_json(json: &str) -> BingoResult<Self> {
        let entries: Vec<QuestionEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Read a JSON deck from disk.
    pub fn load(path: impl AsRef<Path>) -> BingoResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[QuestionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this deck with whole entries reordered, so each prompt keeps
    /// its answer and the answer's cell follows the prompt.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut entries = self.entries.clone();
        entries.shuffle(rng);
        Self { entries }
    }

    /// The nine football questions that ship with the game.
    ///
    /// Note the last two entries share answer id 6 with different values.
    pub fn sample() -> Self {
        let entry = |question: &str, id: u32, value: &str, image: &str| {
            QuestionEntry::new(question, Answer::new(id, value, image))
        };
        Self::new(vec![
            entry("Messi", 1, "PSG", "assets/psgf.png"),
            entry("2014", 2, "Mario Götze", "assets/mario.png"),
            entry("Brazil", 3, "Vinícius Júnior", "assets/bra.png"),
            entry("Portugal", 4, "Cristiano Ronaldo", "assets/ronal.png"),
            entry("Ballon d’Or", 5, "Luka Modrić", "assets/bal.png"),
            entry("Mbappé", 6, "Kylian Mbappé", "assets/m.png"),
            entry("Liverpool", 7, "Mohamed Salah", "assets/liv.png"),
            entry("Tottenham", 8, "Harry Kane", "assets/harr.png"),
            entry("Bayern", 6, "Germany", "assets/germany.png"),
        ])
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::sample()
    }
}
