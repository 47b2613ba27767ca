use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::identity::{IdSource, CHOICE_ID_BASE, QUESTION_IDS};
use crate::models::domain::choice::Choice;
use crate::models::domain::grading::{self, GradedSelection};
use crate::models::dto::request::{CreateChoiceRequest, CreateQuestionRequest};

/// A multiple-choice quiz question and the choices it owns.
///
/// Construction validates the request before an id is drawn, so a rejected
/// question never consumes an id. Choice ids are scoped to the question and
/// are never reused, even after removal.
#[derive(Debug, Serialize)]
pub struct Question {
    id: u64,
    title: String,
    points: i32,
    max_selections: i32,
    choices: Vec<Choice>,
    #[serde(skip)]
    next_choice_id: u64,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Question {
    /// Create a question worth one point accepting a single selection.
    pub fn new(title: impl Into<String>) -> AppResult<Self> {
        Self::create(CreateQuestionRequest::new(title))
    }

    /// Create a question with ids drawn from the process-wide sequence.
    pub fn create(request: CreateQuestionRequest) -> AppResult<Self> {
        Self::create_with(&*QUESTION_IDS, CHOICE_ID_BASE, request)
    }

    pub fn create_with(
        ids: &dyn IdSource,
        choice_id_base: u64,
        request: CreateQuestionRequest,
    ) -> AppResult<Self> {
        request.validate()?;

        let id = ids.next_id()?;
        let now = Utc::now();
        log::debug!("Created question {} ({:?})", id, request.title);

        Ok(Question {
            id,
            title: request.title,
            points: request.points,
            max_selections: request.max_selections,
            choices: Vec::new(),
            next_choice_id: choice_id_base,
            created_at: now,
            modified_at: now,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn max_selections(&self) -> i32 {
        self.max_selections
    }

    /// Choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn choice(&self, choice_id: u64) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    pub fn correct_choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().filter(|c| c.is_correct())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> AppResult<&Choice> {
        self.add_choice_request(CreateChoiceRequest::new(text, is_correct))
    }

    pub fn add_choice_request(&mut self, request: CreateChoiceRequest) -> AppResult<&Choice> {
        request.validate()?;

        let id = self.next_choice_id;
        let next = id.checked_add(1).ok_or_else(|| {
            AppError::IdExhausted(format!("question {} has no choice id left", self.id))
        })?;

        self.choices.push(Choice::new(id, request.text, request.is_correct));
        self.next_choice_id = next;
        self.touch();
        log::debug!("Added choice {} to question {}", id, self.id);

        self.choices
            .last()
            .ok_or_else(|| AppError::ValidationError(format!("choice {} was not stored", id)))
    }

    /// Remove a choice, returning it. Unknown ids leave the question untouched.
    pub fn remove_choice_by_id(&mut self, choice_id: u64) -> Option<Choice> {
        let Some(position) = self.choices.iter().position(|c| c.id() == choice_id) else {
            log::debug!("Question {} has no choice {}", self.id, choice_id);
            return None;
        };

        let removed = self.choices.remove(position);
        self.touch();
        log::debug!("Removed choice {} from question {}", choice_id, self.id);
        Some(removed)
    }

    pub fn remove_all_choices(&mut self) {
        let count = self.choices.len();
        self.choices.clear();
        self.touch();
        log::debug!("Removed {} choices from question {}", count, self.id);
    }

    /// Mark exactly the given choices as correct and every other choice as
    /// incorrect. Ids that match no choice are ignored.
    pub fn set_correct_choices(&mut self, choice_ids: &[u64]) {
        let correct: HashSet<u64> = choice_ids.iter().copied().collect();

        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }
        self.touch();
        log::debug!(
            "Question {} now has {} correct choices",
            self.id,
            self.correct_choices().count()
        );
    }

    /// Grade a submission. Fails when more ids are submitted than
    /// `max_selections` allows, counting duplicates.
    pub fn correct_selected_choices(&self, selected_ids: &[u64]) -> AppResult<GradedSelection> {
        if selected_ids.len() > self.max_selections as usize {
            log::warn!(
                "Rejected submission of {} choices for question {} (max {})",
                selected_ids.len(),
                self.id,
                self.max_selections
            );
            return Err(AppError::ValidationError(format!(
                "{} choices selected but at most {} allowed",
                selected_ids.len(),
                self.max_selections
            )));
        }

        Ok(grading::grade(self, selected_ids))
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}
