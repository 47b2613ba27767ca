use std::collections::HashSet;

use serde::Serialize;

use crate::models::domain::Question;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub choice_id: u64,
    pub is_correct: bool,
}

/// Outcome of grading one submission against one question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GradedSelection {
    pub question_id: u64,
    /// One entry per submitted id, in submission order.
    pub selections: Vec<SelectionResult>,
    /// The submitted ids are exactly the question's correct choices.
    pub fully_correct: bool,
    pub points_earned: i32,
}

impl GradedSelection {
    /// True when something was submitted and every submitted id is a correct choice.
    pub fn all_selected_correct(&self) -> bool {
        !self.selections.is_empty() && self.selections.iter().all(|s| s.is_correct)
    }

    pub fn is_correct(&self, choice_id: u64) -> Option<bool> {
        self.selections
            .iter()
            .find(|s| s.choice_id == choice_id)
            .map(|s| s.is_correct)
    }
}

/// Grade a submission. Ids that match no choice grade as incorrect.
pub(crate) fn grade(question: &Question, selected_ids: &[u64]) -> GradedSelection {
    let correct_ids: HashSet<u64> = question.correct_choices().map(|c| c.id()).collect();

    let selections: Vec<SelectionResult> = selected_ids
        .iter()
        .map(|&choice_id| SelectionResult {
            choice_id,
            is_correct: correct_ids.contains(&choice_id),
        })
        .collect();

    let submitted: HashSet<u64> = selected_ids.iter().copied().collect();
    let fully_correct = !correct_ids.is_empty() && submitted == correct_ids;

    GradedSelection {
        question_id: question.id(),
        selections,
        fully_correct,
        points_earned: if fully_correct { question.points() } else { 0 },
    }
}
