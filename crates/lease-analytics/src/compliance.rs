//! Regulatory compliance report for a single lease
//!
//! Starts from a perfect score of 100 and deducts per finding. Each check is
//! an independent function over the lowercased text returning its findings.

use crate::patterns::{
    missing_keywords, DISCRIMINATORY_LANGUAGE, NON_REFUNDABLE_DEPOSIT, REQUIRED_DISCLOSURES,
};
use shared_types::{ComplianceReport, RiskBand};
use tracing::debug;

const PERFECT_SCORE: f64 = 100.0;
const DISCRIMINATION_DEDUCTION: f64 = 25.0;
const NON_REFUNDABLE_DEDUCTION: f64 = 15.0;
const MISSING_DISCLOSURE_DEDUCTION: f64 = 5.0;

/// Scores below this are high compliance risk
pub const HIGH_RISK_BELOW: f64 = 70.0;
/// Scores below this (and at or above [`HIGH_RISK_BELOW`]) are medium risk
pub const MEDIUM_RISK_BELOW: f64 = 85.0;

/// A single compliance deduction
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceFinding {
    pub deduction: f64,
    pub violation: String,
    pub recommendation: String,
}

/// Fair housing: one deduction per discriminatory phrase present
pub fn check_fair_housing(text_lower: &str) -> Vec<ComplianceFinding> {
    DISCRIMINATORY_LANGUAGE
        .iter()
        .filter(|term| text_lower.contains(*term))
        .map(|term| ComplianceFinding {
            deduction: DISCRIMINATION_DEDUCTION,
            violation: format!("Potentially discriminatory language: '{}'", term),
            recommendation: "Remove discriminatory language and ensure fair housing compliance"
                .to_string(),
        })
        .collect()
}

/// Security deposit: non-refundable deposits
pub fn check_security_deposit(text_lower: &str) -> Vec<ComplianceFinding> {
    if !text_lower.contains(NON_REFUNDABLE_DEPOSIT) {
        return Vec::new();
    }
    vec![ComplianceFinding {
        deduction: NON_REFUNDABLE_DEDUCTION,
        violation: "Non-refundable deposits may violate local regulations".to_string(),
        recommendation: "Review local security deposit laws".to_string(),
    }]
}

/// Disclosures: a single finding listing every missing disclosure
pub fn check_disclosures(text_lower: &str) -> Vec<ComplianceFinding> {
    let missing = missing_keywords(text_lower, REQUIRED_DISCLOSURES);
    if missing.is_empty() {
        return Vec::new();
    }
    vec![ComplianceFinding {
        deduction: MISSING_DISCLOSURE_DEDUCTION * missing.len() as f64,
        violation: format!("Missing required disclosures: {}", missing.join(", ")),
        recommendation: "Add all required property disclosures".to_string(),
    }]
}

/// Bucket a compliance score into a risk band
pub fn compliance_band(score: f64) -> RiskBand {
    if score < HIGH_RISK_BELOW {
        RiskBand::High
    } else if score < MEDIUM_RISK_BELOW {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// Run every compliance check and build the report
pub fn check_compliance(text: &str) -> ComplianceReport {
    let text_lower = text.to_lowercase();

    let mut findings = Vec::new();
    findings.extend(check_fair_housing(&text_lower));
    findings.extend(check_security_deposit(&text_lower));
    findings.extend(check_disclosures(&text_lower));

    let deducted: f64 = findings.iter().map(|f| f.deduction).sum();
    let compliance_score = (PERFECT_SCORE - deducted).max(0.0);
    debug!(findings = findings.len(), compliance_score, "Compliance check complete");

    let (violations, recommendations) = findings
        .into_iter()
        .map(|f| (f.violation, f.recommendation))
        .unzip();

    ComplianceReport {
        compliance_score,
        violations,
        recommendations,
        risk_level: compliance_band(compliance_score),
    }
}
