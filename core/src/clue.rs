use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Reveal progression of a single clue.
///
/// Transitions are monotonic, `Hidden -> Question -> Answer`, and `Answer`
/// is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// A question/answer pair. The text is fixed at fetch time; reveal progress
/// is tracked by the owning [`ClueBoard`](crate::ClueBoard).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    id: ClueId,
    question: String,
    answer: String,
}

impl Clue {
    pub fn new(id: ClueId, question: String, answer: String) -> Self {
        Self {
            id,
            question,
            answer,
        }
    }

    pub const fn id(&self) -> ClueId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// A named group of ordered clues; clue order maps to board rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: String, clues: Vec<Clue>) -> Self {
        Self { id, title, clues }
    }

    pub const fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue_count(&self) -> ClueCount {
        self.clues.len().try_into().unwrap_or(ClueCount::MAX)
    }
}
