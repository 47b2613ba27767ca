use crate::models::domain::Question;
use crate::models::dto::request::CreateQuestionRequest;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Single-answer question with Paris marked correct
    pub fn capital_of_france() -> Question {
        let mut question = Question::new("Capital of France?").unwrap();
        question.add_choice("Paris", true).unwrap();
        question.add_choice("Lyon", false).unwrap();
        question.add_choice("Nice", false).unwrap();
        question
    }

    /// Question with the given choice texts, none marked correct
    pub fn question_with_choices(title: &str, max_selections: i32, texts: &[&str]) -> Question {
        let request = CreateQuestionRequest::new(title).with_max_selections(max_selections);
        let mut question = Question::create(request).unwrap();
        for text in texts {
            question.add_choice(*text, false).unwrap();
        }
        question
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_capital_of_france() {
        let question = capital_of_france();
        assert_eq!(question.choices().len(), 3);
        assert_eq!(question.correct_choices().count(), 1);
    }

    #[test]
    fn test_fixtures_question_with_choices() {
        let question = question_with_choices("Pick two", 2, &["a", "b", "c"]);
        assert_eq!(question.max_selections(), 2);
        assert_eq!(question.choices().len(), 3);
        assert_eq!(question.correct_choices().count(), 0);
    }
}
