use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

use crate::errors::{AppError, AppResult};

/// Default id of the first question drawn from [`QUESTION_IDS`].
pub const QUESTION_ID_BASE: u64 = 1;

/// Default id of the first choice added to a question.
pub const CHOICE_ID_BASE: u64 = 1;

/// Process-wide question id sequence backing `Question::new` and
/// `Question::create`. Callers that need isolated or reproducible ids
/// inject their own [`IdSequence`] through `Question::create_with`.
pub static QUESTION_IDS: Lazy<IdSequence> =
    Lazy::new(|| IdSequence::starting_at(QUESTION_ID_BASE));

#[cfg_attr(test, mockall::automock)]
pub trait IdSource: Send + Sync {
    /// Draw the next id. Every successful call returns a value greater than
    /// any returned before; fails once the sequence is used up.
    fn next_id(&self) -> AppResult<u64>;
}

/// Monotonic id counter, safe to share between threads.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// The id the next call to `next_id` will hand out.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(QUESTION_ID_BASE)
    }
}

impl IdSource for IdSequence {
    fn next_id(&self) -> AppResult<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|n| AppError::IdExhausted(format!("no id left after {}", n)))
    }
}
