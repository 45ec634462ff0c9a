use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUNS is a valid regex pattern"));

/// Collapses every run of whitespace (including newlines from document
/// extraction) into a single space and trims the ends.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}
