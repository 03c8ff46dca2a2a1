use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sub-question boundaries: sentence terminators or the conjunction "and".
    static ref QUESTION_BOUNDARY: Regex =
        Regex::new(r"\s*[.?;]+\s*|\s+and\s+").expect("valid question boundary pattern");
}

/// Break one free-text input into independent sub-questions, dropping empty
/// fragments and trimming whitespace. Order is preserved.
pub fn split_questions(text: &str) -> Vec<String> {
    QUESTION_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}
