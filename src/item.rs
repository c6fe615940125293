use crate::{
    answers::{
        get_correct_answers_indices, map_correct_answers, normalize_order,
        update_answers_to_question_type_in,
    },
    models::{Answers, AssessmentItem, CorrectIndices, QuestionKind},
    names,
};

impl AssessmentItem {
    /// Build an item whose answers already satisfy `kind`.
    pub fn new(kind: QuestionKind, question: impl Into<String>, answers: Answers) -> Self {
        let answers = update_answers_to_question_type_in(names::DEFAULT_LOCALE, kind, &answers);
        Self {
            kind,
            question: question.into(),
            answers,
        }
    }

    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.set_kind_in(names::DEFAULT_LOCALE, kind);
    }

    /// Change the question kind, rewriting the answers to match it.
    pub fn set_kind_in(&mut self, locale: &str, kind: QuestionKind) {
        tracing::debug!("assessment item kind {} -> {kind}", self.kind);
        self.answers = update_answers_to_question_type_in(locale, kind, &self.answers);
        self.kind = kind;
    }

    pub fn correct_indices(&self) -> CorrectIndices {
        get_correct_answers_indices(self.kind, &self.answers)
    }

    pub fn set_correct(&mut self, indices: &CorrectIndices) {
        self.answers = normalize_order(map_correct_answers(&self.answers, indices));
    }
}
