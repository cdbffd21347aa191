use std::sync::OnceLock;

use regex::Regex;

/// Lower-cased word tokens of two or more word characters, in text order.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|token| token.as_str().to_string())
        .collect()
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("valid regex"))
}
