use rust_i18n::t;
use serde::Serialize;

use crate::models::{AssessmentItem, QuestionKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "error", content = "index", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    QuestionRequired,
    AnswersRequired,
    InvalidNumberOfCorrectAnswers,
    /// Zero-based index of the blank answer.
    EmptyAnswer(usize),
    /// Zero-based index of the non-numeric answer.
    InvalidInputAnswer(usize),
}

impl ValidationError {
    pub fn message(&self, locale: &str) -> String {
        match self {
            ValidationError::QuestionRequired => {
                t!("validation.question_required", locale = locale).to_string()
            }
            ValidationError::AnswersRequired => {
                t!("validation.answers_required", locale = locale).to_string()
            }
            ValidationError::InvalidNumberOfCorrectAnswers => {
                t!("validation.invalid_number_of_correct_answers", locale = locale).to_string()
            }
            ValidationError::EmptyAnswer(idx) => {
                t!("validation.empty_answer", locale = locale, number = idx + 1).to_string()
            }
            ValidationError::InvalidInputAnswer(idx) => {
                t!("validation.invalid_input_answer", locale = locale, number = idx + 1).to_string()
            }
        }
    }
}

/// Check an item the way the editor does before saving it.
///
/// Every problem found is reported, in a stable order: question, answer
/// count, correctness, then per-answer problems by position.
pub fn validate_assessment_item(item: &AssessmentItem) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if item.question.trim().is_empty() {
        errors.push(ValidationError::QuestionRequired);
    }

    if item.answers.is_empty() {
        errors.push(ValidationError::AnswersRequired);
        return errors;
    }

    let correct = item.answers.iter().filter(|a| a.correct).count();
    let correct_count_ok = match item.kind {
        QuestionKind::SingleSelection | QuestionKind::TrueFalse => correct == 1,
        QuestionKind::MultipleSelection | QuestionKind::InputQuestion => correct >= 1,
    };
    if !correct_count_ok {
        errors.push(ValidationError::InvalidNumberOfCorrectAnswers);
    }

    for (idx, answer) in item.answers.iter().enumerate() {
        let text = answer.answer.trim();
        if text.is_empty() {
            errors.push(ValidationError::EmptyAnswer(idx));
        } else if item.kind == QuestionKind::InputQuestion
            && !text.parse::<f64>().is_ok_and(f64::is_finite)
        {
            errors.push(ValidationError::InvalidInputAnswer(idx));
        }
    }

    errors
}
