use std::sync::LazyLock;

use regex::Regex;

/// Month name or abbreviation (case-sensitive), an optional non-digit separator,
/// whitespace, then a four-digit year.
static YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"((?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|(Nov|Dec)(?:ember)?)\D?)\s+(?P<year>[0-9]{4})",
    )
    .expect("year pattern is valid")
});

/// Extracts the year of every month-year mention, in text order.
/// No deduplication and no range check.
pub fn extract_years(text: &str) -> Vec<i32> {
    YEAR_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.name("year"))
        .filter_map(|year| year.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_month_names() {
        assert_eq!(
            extract_years("I worked there from June 2019 to August 2021."),
            vec![2019, 2021]
        );
    }

    #[test]
    fn test_abbreviations_with_separators() {
        assert_eq!(
            extract_years("Sep 2015 - Dec. 2018, then March, 2020"),
            vec![2015, 2018, 2020]
        );
    }

    #[test]
    fn test_month_names_are_case_sensitive() {
        assert!(extract_years("june 2019 to AUGUST 2021").is_empty());
    }

    #[test]
    fn test_bare_years_are_ignored() {
        assert!(extract_years("Graduated 2012, promoted 2016").is_empty());
    }

    #[test]
    fn test_duplicates_and_odd_years_are_kept() {
        assert_eq!(extract_years("May 2020; May 2020; Jan 0001"), vec![2020, 2020, 1]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_years("").is_empty());
    }
}
