use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9\.\-+_]+@[a-z0-9\.\-+_]+\.[a-z]+").expect("email pattern is valid")
});

/// Extracts every email-shaped match, case-insensitively, with original casing.
/// Repeated addresses appear once per occurrence.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
