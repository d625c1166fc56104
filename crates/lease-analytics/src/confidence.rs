// Document-quality confidence, separate from extraction confidence
use crate::config::DocumentConfidence;
use crate::patterns::{count_present, LEASE_AGREEMENT_PHRASE, LEASE_KEY_TERMS};

const BASE_SCORE: f64 = 50.0;
const LONG_TEXT_BONUS: f64 = 20.0;
const MEDIUM_TEXT_BONUS: f64 = 10.0;
const LEASE_AGREEMENT_BONUS: f64 = 15.0;
const KEY_TERM_BONUS: f64 = 3.0;
const MAX_SCORE: f64 = 95.0;

/// How much the analysis of `text` can be trusted, from 50 up to 95.
///
/// Length is measured in characters, not bytes.
pub fn document_confidence(text: &str, config: &DocumentConfidence) -> f64 {
    let mut score = BASE_SCORE;

    let length = text.chars().count();
    if length > config.high_text_length {
        score += LONG_TEXT_BONUS;
    } else if length > config.medium_text_length {
        score += MEDIUM_TEXT_BONUS;
    }

    let text_lower = text.to_lowercase();
    if text_lower.contains(LEASE_AGREEMENT_PHRASE) {
        score += LEASE_AGREEMENT_BONUS;
    }
    score += KEY_TERM_BONUS * count_present(&text_lower, LEASE_KEY_TERMS) as f64;

    score.min(MAX_SCORE)
}
