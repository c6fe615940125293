use serde::Serialize;

use crate::{
    answers::{
        get_correct_answers_indices, map_correct_answers, update_answers_to_question_type_in,
    },
    models::{Answers, AssessmentItem, CorrectIndices, QuestionKind},
    names,
    rejections::{AppError, ResultExt},
    validation::validate_assessment_item,
};

pub struct ValidationReport {
    /// One localized message per line.
    pub output: String,
    pub is_valid: bool,
}

/// Pick a supported locale for `tag`, falling back to the default one.
pub fn resolve_locale(tag: &str) -> &'static str {
    names::match_supported_locale(tag).unwrap_or_else(|| {
        tracing::warn!(
            "unsupported locale {tag:?}, using {}",
            names::DEFAULT_LOCALE
        );
        names::DEFAULT_LOCALE
    })
}

pub fn convert(locale: &str, kind: QuestionKind, input: &str) -> Result<String, AppError> {
    let answers = decode_answers(input)?;
    let updated = update_answers_to_question_type_in(locale, kind, &answers);
    tracing::info!("converted {} answers into {} for {kind}", answers.len(), updated.len());
    encode(&updated)
}

pub fn indices(kind: QuestionKind, input: &str) -> Result<String, AppError> {
    let answers = decode_answers(input)?;
    encode(&get_correct_answers_indices(kind, &answers))
}

pub fn mark(indices: &CorrectIndices, input: &str) -> Result<String, AppError> {
    let answers = decode_answers(input)?;
    tracing::debug!("marking {indices:?} as correct");
    let out_of_range: Vec<_> = match indices {
        CorrectIndices::Single(idx) => idx.iter().copied().collect(),
        CorrectIndices::Multiple(list) => list.clone(),
    }
    .into_iter()
    .filter(|idx| *idx >= answers.len())
    .collect();
    if !out_of_range.is_empty() {
        tracing::warn!(
            "ignoring indices {out_of_range:?} for a list of {} answers",
            answers.len()
        );
    }
    encode(&map_correct_answers(&answers, indices))
}

pub fn validate(locale: &str, input: &str) -> Result<ValidationReport, AppError> {
    let item: AssessmentItem =
        serde_json::from_str(input).reject_input("failed to decode assessment item")?;
    let errors = validate_assessment_item(&item);
    tracing::info!("validated {} item: {} problem(s)", item.kind, errors.len());

    let output = errors
        .iter()
        .map(|e| e.message(locale))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ValidationReport {
        output,
        is_valid: errors.is_empty(),
    })
}

fn decode_answers(input: &str) -> Result<Answers, AppError> {
    serde_json::from_str(input).reject_input("failed to decode answers")
}

fn encode<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).reject("failed to encode output")
}
