use rust_i18n::t;

use crate::{
    models::{Answer, Answers, CorrectIndices, QuestionKind},
    names,
};

/// Read which answers are correct.
///
/// Single selection and true/false yield the index of the first correct
/// answer, so a malformed list with several flagged answers still gives one
/// index. The other kinds yield every correct index.
pub fn get_correct_answers_indices(kind: QuestionKind, answers: &[Answer]) -> CorrectIndices {
    if kind.is_single_answer() {
        CorrectIndices::Single(answers.iter().position(|a| a.correct))
    } else {
        CorrectIndices::Multiple(
            answers
                .iter()
                .enumerate()
                .filter(|(_, a)| a.correct)
                .map(|(idx, _)| idx)
                .collect(),
        )
    }
}

/// Return a copy of `answers` flagged correct exactly at `indices`.
///
/// Indices past the end are ignored and `order` is left as it was.
pub fn map_correct_answers(answers: &[Answer], indices: &CorrectIndices) -> Answers {
    answers
        .iter()
        .enumerate()
        .map(|(idx, a)| Answer {
            correct: indices.contains(idx),
            ..a.clone()
        })
        .collect()
}

/// Assign sequential 1-based `order` values following list position.
pub fn normalize_order(answers: Answers) -> Answers {
    answers
        .into_iter()
        .zip(1..)
        .map(|(a, order)| a.with_order(order))
        .collect()
}

/// The localized "True" and "False" answer texts.
pub fn true_false_labels(locale: &str) -> (String, String) {
    (
        t!("answers.true_label", locale = locale).to_string(),
        t!("answers.false_label", locale = locale).to_string(),
    )
}

pub fn update_answers_to_question_type(kind: QuestionKind, answers: &[Answer]) -> Answers {
    update_answers_to_question_type_in(names::DEFAULT_LOCALE, kind, answers)
}

/// Convert `answers` into a list that satisfies the rules of `kind`.
///
/// `locale` picks the True/False labels. The input is never modified.
pub fn update_answers_to_question_type_in(
    locale: &str,
    kind: QuestionKind,
    answers: &[Answer],
) -> Answers {
    tracing::debug!("converting {} answers to {kind}", answers.len());

    let updated = match kind {
        QuestionKind::TrueFalse => return true_false_answers(locale, answers),
        QuestionKind::SingleSelection => {
            let first_correct = answers.iter().position(|a| a.correct).unwrap_or(0);
            map_correct_answers(answers, &first_correct.into())
        }
        QuestionKind::MultipleSelection => answers.to_vec(),
        QuestionKind::InputQuestion => answers
            .iter()
            .map(|a| Answer {
                correct: true,
                ..a.clone()
            })
            .collect(),
    };

    normalize_order(updated)
}

fn true_false_answers(locale: &str, answers: &[Answer]) -> Answers {
    let (true_label, false_label) = true_false_labels(locale);

    // "True" stays correct unless the first correct answer reads as "False".
    let true_correct = !answers
        .iter()
        .find(|a| a.correct)
        .is_some_and(|a| is_false_label(&a.answer, &false_label));

    vec![
        Answer::new(true_label, true_correct).with_order(1),
        Answer::new(false_label, !true_correct).with_order(2),
    ]
}

/// English "false", the active label, or the False label of any supported locale.
fn is_false_label(text: &str, active_label: &str) -> bool {
    let text = text.trim().to_lowercase();
    text == names::FALSE_TEXT
        || text == active_label.to_lowercase()
        || names::SUPPORTED_LOCALES
            .iter()
            .any(|locale| text == true_false_labels(locale).1.to_lowercase())
}
