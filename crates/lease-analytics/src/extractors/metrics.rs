//! Business metric extraction
//!
//! Each metric kind owns an ordered cascade of candidate patterns, most
//! specific first. The first pattern whose capture parses and lands inside the
//! configured range wins; later patterns are fallbacks and never override an
//! accepted value.

use crate::config::{ExtractionRanges, ValueRange};
use crate::extractors::numeric::{normalize_text, parse_amount, parse_count};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::BusinessMetrics;
use tracing::{debug, info, warn};

lazy_static! {
    static ref RENT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"monthly.*base.*rent.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"base.*rent.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"monthly.*rent.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"rent.*?\$\s?([\d,]+\.?\d*).*(?:per|/|a)\s*month").unwrap(),
        Regex::new(r"monthly.*payment.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*per month").unwrap(),
        Regex::new(r"tenant.*pay.*?\$\s?([\d,]+\.?\d*).*month").unwrap(),
        Regex::new(r"rent(?:al)?.*amount.*?\$\s?([\d,]+\.?\d*)").unwrap(),
    ];

    static ref SECURITY_DEPOSIT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"security deposit.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"deposit.*amount.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*security\s*deposit").unwrap(),
        Regex::new(r"initial.*deposit.*?\$\s?([\d,]+\.?\d*)").unwrap(),
    ];

    static ref PET_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"pet.*(?:fee|rent|deposit).*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"animal.*(?:fee|rent).*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*(?:per|/)\s*pet").unwrap(),
        Regex::new(r"additional.*pet.*?\$\s?([\d,]+\.?\d*)").unwrap(),
    ];

    static ref LATE_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"late.*(?:fee|charge|payment).*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*late.*(?:fee|charge)").unwrap(),
        Regex::new(r"delinquent.*payment.*?\$\s?([\d,]+\.?\d*)").unwrap(),
    ];

    static ref APPLICATION_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"application.*fee.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"processing.*fee.*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*application").unwrap(),
    ];

    static ref PARKING_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"parking.*(?:fee|charge).*?\$\s?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"\$\s?([\d,]+\.?\d*).*parking").unwrap(),
        Regex::new(r"garage.*(?:fee|rent).*?\$\s?([\d,]+\.?\d*)").unwrap(),
    ];

    static ref NOTICE_PERIOD_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+).*day.*notice").unwrap(),
        Regex::new(r"notice.*?(\d+).*day").unwrap(),
        Regex::new(r"(\d+).*calendar day.*notice").unwrap(),
    ];

    static ref LEASE_TERM_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+).*month.*term").unwrap(),
        Regex::new(r"term.*?(\d+).*month").unwrap(),
        Regex::new(r"lease.*period.*?(\d+).*month").unwrap(),
    ];

    static ref TERMINATION_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"liquidated.*damages.*?\$?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"early.*termination.*?\$?([\d,]+\.?\d*)").unwrap(),
        Regex::new(r"termination.*fee.*?\$?([\d,]+\.?\d*)").unwrap(),
    ];
}

/// The financial and temporal quantities the extractor looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Rent,
    SecurityDeposit,
    PetFee,
    LateFee,
    ApplicationFee,
    ParkingFee,
    NoticePeriod,
    LeaseTerm,
    TerminationFee,
}

impl MetricKind {
    /// Evaluation order of the extractor
    pub const ALL: [MetricKind; 9] = [
        MetricKind::Rent,
        MetricKind::SecurityDeposit,
        MetricKind::PetFee,
        MetricKind::LateFee,
        MetricKind::ApplicationFee,
        MetricKind::ParkingFee,
        MetricKind::NoticePeriod,
        MetricKind::LeaseTerm,
        MetricKind::TerminationFee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Rent => "rent",
            MetricKind::SecurityDeposit => "security_deposit",
            MetricKind::PetFee => "pet_fee",
            MetricKind::LateFee => "late_fee",
            MetricKind::ApplicationFee => "application_fee",
            MetricKind::ParkingFee => "parking_fee",
            MetricKind::NoticePeriod => "notice_period",
            MetricKind::LeaseTerm => "lease_term",
            MetricKind::TerminationFee => "termination_fee",
        }
    }

    /// Candidate patterns, most specific first
    pub fn patterns(&self) -> &'static [Regex] {
        match self {
            MetricKind::Rent => &RENT_PATTERNS,
            MetricKind::SecurityDeposit => &SECURITY_DEPOSIT_PATTERNS,
            MetricKind::PetFee => &PET_FEE_PATTERNS,
            MetricKind::LateFee => &LATE_FEE_PATTERNS,
            MetricKind::ApplicationFee => &APPLICATION_FEE_PATTERNS,
            MetricKind::ParkingFee => &PARKING_FEE_PATTERNS,
            MetricKind::NoticePeriod => &NOTICE_PERIOD_PATTERNS,
            MetricKind::LeaseTerm => &LEASE_TERM_PATTERNS,
            MetricKind::TerminationFee => &TERMINATION_FEE_PATTERNS,
        }
    }

    /// Weight this kind contributes to extraction confidence when found.
    /// Kinds without a weight are not tracked.
    pub fn confidence_weight(&self) -> Option<f64> {
        match self {
            MetricKind::Rent => Some(0.9),
            MetricKind::SecurityDeposit => Some(0.85),
            MetricKind::NoticePeriod => Some(0.8),
            MetricKind::LeaseTerm => Some(0.85),
            _ => None,
        }
    }

    fn parse(&self, raw: &str) -> Option<f64> {
        match self {
            MetricKind::NoticePeriod | MetricKind::LeaseTerm => parse_count(raw),
            _ => parse_amount(raw),
        }
    }
}

/// A value accepted by a cascade, with the index of the pattern that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extraction {
    pub value: f64,
    pub pattern_index: usize,
}

/// Run one metric's cascade over normalized text.
///
/// A capture that fails to parse or falls outside `range` is a non-match and
/// the next pattern is tried.
pub fn first_accepted(
    text: &str,
    patterns: &[Regex],
    range: ValueRange,
    parse: impl Fn(&str) -> Option<f64>,
) -> Option<Extraction> {
    for (pattern_index, pattern) in patterns.iter().enumerate() {
        let Some(raw) = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        match parse(raw) {
            Some(value) if range.contains(value) => {
                return Some(Extraction {
                    value,
                    pattern_index,
                });
            }
            Some(value) => {
                debug!(pattern_index, value, "Capture outside accepted range");
            }
            None => {
                warn!(pattern_index, capture = raw, "Failed to parse numeric capture");
            }
        }
    }
    None
}

/// Extract a single metric kind from already-normalized text
pub fn extract_metric(
    normalized: &str,
    kind: MetricKind,
    ranges: &ExtractionRanges,
) -> Option<Extraction> {
    first_accepted(
        normalized,
        kind.patterns(),
        ranges.for_kind(kind),
        |raw| kind.parse(raw),
    )
}

/// Extract all business metrics from raw lease text. Never fails; anything not
/// found stays at zero and lowers `extraction_confidence`.
pub fn extract_metrics(text: &str, ranges: &ExtractionRanges) -> BusinessMetrics {
    debug!(chars = text.len(), "Extracting business metrics");

    let normalized = normalize_text(text);
    let mut metrics = BusinessMetrics::default();
    let mut confidence_scores = Vec::new();

    for kind in MetricKind::ALL {
        let extraction = extract_metric(&normalized, kind, ranges);

        if let Some(weight) = kind.confidence_weight() {
            confidence_scores.push(if extraction.is_some() { weight } else { 0.0 });
        }

        match extraction {
            Some(Extraction {
                value,
                pattern_index,
            }) => {
                debug!(metric = kind.name(), value, pattern_index, "Extracted metric");
                assign(&mut metrics, kind, value);
            }
            None if kind == MetricKind::Rent => {
                warn!("Monthly rent not extracted from document");
            }
            None => {}
        }
    }

    metrics.extraction_confidence = if confidence_scores.is_empty() {
        0.0
    } else {
        confidence_scores.iter().sum::<f64>() / confidence_scores.len() as f64
    };
    metrics.recompute_totals();

    info!(
        confidence = metrics.extraction_confidence,
        total_lease_value = metrics.total_lease_value,
        "Metrics extraction complete"
    );
    metrics
}

fn assign(metrics: &mut BusinessMetrics, kind: MetricKind, value: f64) {
    match kind {
        MetricKind::Rent => metrics.monthly_rent = value,
        MetricKind::SecurityDeposit => metrics.security_deposit = value,
        MetricKind::PetFee => metrics.pet_fees = value,
        MetricKind::LateFee => metrics.late_fee = value,
        MetricKind::ApplicationFee => metrics.application_fee = value,
        MetricKind::ParkingFee => metrics.parking_fee = value,
        // Count kinds are parsed from u32 and range-checked, so the cast is exact
        MetricKind::NoticePeriod => metrics.notice_period_days = value as u32,
        MetricKind::LeaseTerm => metrics.lease_duration_months = value as u32,
        MetricKind::TerminationFee => metrics.early_termination_penalty = value,
    }
}
