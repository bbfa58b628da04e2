//! Question and answer types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to a bundled image asset (e.g. `"assets/psgf.png"`).
///
/// The engine never resolves it; it is passed through to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The answer shown in a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u32,
    /// Display text. Also what answers are matched on.
    pub value: String,
    pub image: ImageRef,
}

/// One question/answer pair.
///
/// Position in the deck is significant: entry `i` is both the `i`-th question
/// asked and the answer shown in cell `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// Prompt shown to the player.
    pub question: String,
    pub answer: Answer,
}

impl Answer {
    pub fn new(id: u32, value: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            image: ImageRef::new(image),
        }
    }

    /// Whether two answers are considered the same for scoring purposes.
    /// Compared on display value, not id.
    pub fn matches(&self, other: &Answer) -> bool {
        self.value == other.value
    }
}

impl QuestionEntry {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}
