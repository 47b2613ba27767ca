use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_POINTS: i32 = 1;
pub const DEFAULT_MAX_SELECTIONS: i32 = 1;

fn default_points() -> i32 {
    DEFAULT_POINTS
}

fn default_max_selections() -> i32 {
    DEFAULT_MAX_SELECTIONS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default = "default_points")]
    #[validate(range(min = 1, max = 100))]
    pub points: i32,

    #[serde(default = "default_max_selections")]
    #[validate(range(min = 1))]
    pub max_selections: i32,
}

impl CreateQuestionRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: DEFAULT_POINTS,
            max_selections: DEFAULT_MAX_SELECTIONS,
        }
    }

    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: i32) -> Self {
        self.max_selections = max_selections;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateChoiceRequest {
    #[validate(length(min = 1))]
    pub text: String,

    #[serde(default)]
    pub is_correct: bool,
}

impl CreateChoiceRequest {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}
