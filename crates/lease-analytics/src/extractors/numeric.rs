// Numeric normalization and parsing for extracted lease text
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Digits split by whitespace, a common OCR artifact ("2 407" for "2407")
    static ref SPLIT_DIGITS: Regex = Regex::new(r"(\d)\s+(\d)").unwrap();
}

/// Rejoin whitespace-split digit runs and lowercase the text.
///
/// Matches are non-overlapping, so "1 2 3" becomes "12 3".
pub fn normalize_text(text: &str) -> String {
    SPLIT_DIGITS.replace_all(text, "$1$2").to_lowercase()
}

/// Parse a currency capture such as "2,407.00", dropping separators and stray spaces
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != ' ').collect();
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse a whole-number capture (days, months)
pub fn parse_count(raw: &str) -> Option<f64> {
    raw.trim().parse::<u32>().ok().map(f64::from)
}
