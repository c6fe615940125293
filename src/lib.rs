rust_i18n::i18n!("locales", fallback = "en");

pub mod answers;
pub mod commands;
pub mod item;
pub mod models;
pub mod names;
pub mod rejections;
pub mod utils;
pub mod validation;

pub use answers::{
    get_correct_answers_indices, map_correct_answers, update_answers_to_question_type,
    update_answers_to_question_type_in,
};
pub use models::{Answer, Answers, AssessmentItem, CorrectIndices, QuestionKind};
pub use validation::{validate_assessment_item, ValidationError};
