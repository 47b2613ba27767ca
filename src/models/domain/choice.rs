use serde::Serialize;

/// A candidate answer owned by exactly one [`Question`](super::Question).
///
/// Choices are only created, re-marked and removed through their question,
/// so the fields are read-only from outside the crate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: u64,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: u64, text: String, is_correct: bool) -> Self {
        Choice {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
