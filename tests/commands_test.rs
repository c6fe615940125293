use answerset::{commands, rejections::AppError, Answer, CorrectIndices, QuestionKind};

const ANSWERS: &str = r#"[
    {"answer": "Mayonnaise", "correct": false},
    {"answer": "Peanut butter", "correct": true},
    {"answer": "Jelly", "correct": true}
]"#;

fn decode(output: &str) -> Vec<Answer> {
    serde_json::from_str(output).unwrap()
}

#[test]
fn convert_outputs_normalized_answers() {
    let output = commands::convert("en", QuestionKind::SingleSelection, ANSWERS).unwrap();
    let answers = decode(&output);
    assert_eq!(
        answers.iter().map(|a| a.correct).collect::<Vec<_>>(),
        vec![false, true, false]
    );
    assert_eq!(
        answers.iter().map(|a| a.order).collect::<Vec<_>>(),
        vec![Some(1), Some(2), Some(3)]
    );
}

#[test]
fn convert_uses_locale_labels() {
    let en = decode(&commands::convert("en", QuestionKind::TrueFalse, "[]").unwrap());
    let ja = decode(&commands::convert("ja", QuestionKind::TrueFalse, "[]").unwrap());
    assert_eq!(en[0].answer, "True");
    assert_ne!(ja[0].answer, en[0].answer);
    assert!(ja[0].correct);
}

#[test]
fn indices_prints_kind_shaped_json() {
    let single = commands::indices(QuestionKind::SingleSelection, ANSWERS).unwrap();
    assert_eq!(serde_json::from_str::<serde_json::Value>(&single).unwrap(), 1);

    let multiple = commands::indices(QuestionKind::MultipleSelection, ANSWERS).unwrap();
    assert_eq!(
        serde_json::from_str::<Vec<usize>>(&multiple).unwrap(),
        vec![1, 2]
    );

    let none = commands::indices(QuestionKind::TrueFalse, "[]").unwrap();
    assert_eq!(none, "null");
}

#[test]
fn mark_flags_only_selected_answers() {
    let output = commands::mark(&CorrectIndices::Multiple(vec![0, 9]), ANSWERS).unwrap();
    assert_eq!(
        decode(&output).iter().map(|a| a.correct).collect::<Vec<_>>(),
        vec![true, false, false]
    );
}

#[test]
fn malformed_json_is_an_input_error() {
    assert_eq!(
        commands::convert("en", QuestionKind::InputQuestion, "{not json"),
        Err(AppError::Input("failed to decode answers"))
    );
    assert!(matches!(
        commands::validate("en", r#"{"kind": "essay"}"#),
        Err(AppError::Input(_))
    ));
}

#[test]
fn validate_reports_localized_messages() {
    let item = r#"{
        "kind": "input_question",
        "question": "",
        "answers": [{"answer": "eight", "correct": true}]
    }"#;
    let report = commands::validate("en", item).unwrap();
    assert!(!report.is_valid);
    assert_eq!(
        report.output,
        "Question is required\nAnswer 1 must be a number"
    );

    let ok = r#"{"kind": "single_selection", "question": "Q", "answers": [{"answer": "A", "correct": true}]}"#;
    let report = commands::validate("en", ok).unwrap();
    assert!(report.is_valid);
    assert!(report.output.is_empty());
}

#[test]
fn resolve_locale_falls_back_to_default() {
    assert_eq!(commands::resolve_locale("ja-JP"), "ja");
    assert_eq!(commands::resolve_locale("fr"), "en");
}
