use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::names;

pub type Answers = Vec<Answer>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    pub correct: bool,
    /// 1-based position, assigned by the normalizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Answer {
    pub fn new(answer: impl Into<String>, correct: bool) -> Self {
        Self {
            answer: answer.into(),
            correct,
            order: None,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelection,
    MultipleSelection,
    TrueFalse,
    InputQuestion,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 4] = [
        QuestionKind::SingleSelection,
        QuestionKind::MultipleSelection,
        QuestionKind::TrueFalse,
        QuestionKind::InputQuestion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::SingleSelection => names::SINGLE_SELECTION,
            QuestionKind::MultipleSelection => names::MULTIPLE_SELECTION,
            QuestionKind::TrueFalse => names::TRUE_FALSE,
            QuestionKind::InputQuestion => names::INPUT_QUESTION,
        }
    }

    /// Kinds whose correctness is a single index rather than a set.
    pub fn is_single_answer(self) -> bool {
        matches!(self, QuestionKind::SingleSelection | QuestionKind::TrueFalse)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown question kind: {:?}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for QuestionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase().replace('-', "_");
        QuestionKind::ALL
            .into_iter()
            .find(|k| k.as_str() == tag)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// Which answers are correct, in the shape the question kind calls for.
///
/// Serializes untagged: `null` or a number for [`CorrectIndices::Single`],
/// an array for [`CorrectIndices::Multiple`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectIndices {
    Single(Option<usize>),
    Multiple(Vec<usize>),
}

impl CorrectIndices {
    pub fn contains(&self, idx: usize) -> bool {
        match self {
            CorrectIndices::Single(i) => *i == Some(idx),
            CorrectIndices::Multiple(indices) => indices.contains(&idx),
        }
    }
}

impl From<usize> for CorrectIndices {
    fn from(idx: usize) -> Self {
        CorrectIndices::Single(Some(idx))
    }
}

impl From<Vec<usize>> for CorrectIndices {
    fn from(indices: Vec<usize>) -> Self {
        CorrectIndices::Multiple(indices)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub kind: QuestionKind,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answers: Answers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_stored_tags() {
        assert_eq!(
            "single_selection".parse::<QuestionKind>(),
            Ok(QuestionKind::SingleSelection)
        );
        assert_eq!(
            "TRUE_FALSE".parse::<QuestionKind>(),
            Ok(QuestionKind::TrueFalse)
        );
        assert_eq!(
            "input-question".parse::<QuestionKind>(),
            Ok(QuestionKind::InputQuestion)
        );
        assert!("perseus_question".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn kind_display_round_trips_through_from_str() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.to_string().parse::<QuestionKind>(), Ok(kind));
        }
    }

    #[test]
    fn answer_order_is_optional_on_the_wire() {
        let answer: Answer = serde_json::from_str(r#"{"answer":"A","correct":true}"#).unwrap();
        assert_eq!(answer, Answer::new("A", true));
        assert_eq!(
            serde_json::to_string(&answer).unwrap(),
            r#"{"answer":"A","correct":true}"#
        );
        assert_eq!(
            serde_json::to_string(&answer.with_order(3)).unwrap(),
            r#"{"answer":"A","correct":true,"order":3}"#
        );
    }

    #[test]
    fn correct_indices_serialize_like_the_front_end() {
        assert_eq!(
            serde_json::to_string(&CorrectIndices::Single(None)).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&CorrectIndices::Single(Some(1))).unwrap(),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&CorrectIndices::Multiple(vec![0, 2])).unwrap(),
            "[0,2]"
        );
        assert_eq!(
            serde_json::from_str::<CorrectIndices>("[1,2]").unwrap(),
            CorrectIndices::Multiple(vec![1, 2])
        );
        assert_eq!(
            serde_json::from_str::<CorrectIndices>("2").unwrap(),
            CorrectIndices::Single(Some(2))
        );
    }
}
