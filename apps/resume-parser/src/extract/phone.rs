use std::sync::LazyLock;

use regex::Regex;

/// Optional `+` or `(`, a nonzero digit, 8+ digits/spaces/dots/dashes/parens, a final digit.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\+\(]?[1-9][0-9 .\-\(\)]{8,}[0-9]").expect("phone pattern is valid")
});

/// Minimum length once spaces are removed.
const MIN_COMPACT_LEN: usize = 10;
/// Candidates this long or longer are treated as ID numbers, not phones.
const MAX_RAW_LEN: usize = 20;

/// Extracts phone-number candidates in scan order. Duplicates are kept.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| is_plausible_phone(text, candidate))
        .map(String::from)
        .collect()
}

fn is_plausible_phone(text: &str, candidate: &str) -> bool {
    candidate.replace(' ', "").len() >= MIN_COMPACT_LEN
        && text.contains(candidate)
        && candidate.len() < MAX_RAW_LEN
}
