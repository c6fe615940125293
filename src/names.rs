// Question kind tags as stored by the curation tool
pub const SINGLE_SELECTION: &str = "single_selection";
pub const MULTIPLE_SELECTION: &str = "multiple_selection";
pub const TRUE_FALSE: &str = "true_false";
pub const INPUT_QUESTION: &str = "input_question";

// English spelling accepted whatever the active locale is
pub const FALSE_TEXT: &str = "false";

// i18n
pub const DEFAULT_LOCALE: &str = "en";
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];
pub const LOCALE_ENV: &str = "ANSWERSET_LOCALE";

/// Match a language tag against supported locales, returning the locale string.
pub fn match_supported_locale(lang: &str) -> Option<&'static str> {
    if let Some(found) = SUPPORTED_LOCALES.iter().find(|l| **l == lang) {
        return Some(found);
    }
    if lang.starts_with("ja-") || lang.starts_with("ja_") {
        return Some("ja");
    }
    if lang.starts_with("en-") || lang.starts_with("en_") {
        return Some("en");
    }
    None
}
