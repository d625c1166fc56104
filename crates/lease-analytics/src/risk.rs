//! Additive risk scoring over the rule set in [`crate::rules`]
//!
//! The raw score is the plain sum of every triggered rule's weight. The level
//! is classified from the raw score; the stored `risk_score` is clamped to
//! `[0, 100]`, so a raw 140 reads as `Critical` with a score of 100.

use crate::config::RiskThresholds;
use crate::patterns::{described_terms_present, LANDLORD_FAVORABLE_TERMS, TENANT_FAVORABLE_TERMS};
use crate::rules::{default_risk_rules, RiskContext, RiskRule};
use shared_types::{BusinessMetrics, RiskAssessment, RiskLevel};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Red flag count above which alternative properties are suggested
const RED_FLAG_LIMIT: usize = 5;

/// Classify a raw (unclamped) score against the thresholds
pub fn classify(raw_score: f64, thresholds: &RiskThresholds) -> RiskLevel {
    if raw_score <= thresholds.low {
        RiskLevel::Low
    } else if raw_score <= thresholds.medium {
        RiskLevel::Medium
    } else if raw_score <= thresholds.high {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Estimated legal and turnover cost if the lease goes wrong
pub fn financial_exposure(metrics: &BusinessMetrics) -> f64 {
    metrics.security_deposit + metrics.early_termination_penalty + metrics.monthly_rent * 2.0
}

/// Scores a lease against an ordered set of [`RiskRule`]s
pub struct RiskScorer {
    rules: Vec<Box<dyn RiskRule>>,
    thresholds: RiskThresholds,
}

impl RiskScorer {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self::with_rules(default_risk_rules(), thresholds)
    }

    pub fn with_rules(rules: Vec<Box<dyn RiskRule>>, thresholds: RiskThresholds) -> Self {
        Self { rules, thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Assess a lease. Never fails; unknown or empty text simply scores 0.
    pub fn assess(&self, text: &str, metrics: &BusinessMetrics) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let ctx = RiskContext {
            text_lower: &text_lower,
            metrics,
        };

        let mut raw_score = 0.0;
        let mut risk_factors = BTreeMap::new();
        let mut red_flags = Vec::new();
        let mut compliance_issues = Vec::new();
        let mut mitigation_strategies = Vec::new();

        for rule in &self.rules {
            let Some(contribution) = rule.evaluate(&ctx) else {
                continue;
            };
            debug!(rule = rule.name(), weight = contribution.weight, "Risk rule triggered");
            raw_score += contribution.weight;
            *risk_factors.entry(contribution.factor).or_insert(0.0) += contribution.weight;
            red_flags.extend(contribution.red_flags);
            if let Some(issue) = contribution.compliance_issue {
                warn!(rule = rule.name(), "Compliance issue detected");
                compliance_issues.push(issue);
            }
            mitigation_strategies.extend(contribution.mitigation);
        }

        let recommendations = self.recommendations(
            metrics,
            raw_score,
            !compliance_issues.is_empty(),
            red_flags.len(),
        );

        let risk_level = classify(raw_score, &self.thresholds);
        info!(
            risk_level = risk_level.as_str(),
            score = raw_score,
            "Risk assessment complete"
        );

        RiskAssessment {
            risk_level,
            risk_score: raw_score.clamp(0.0, 100.0),
            financial_exposure: financial_exposure(metrics),
            compliance_issues,
            tenant_favorable_terms: described_terms_present(&text_lower, TENANT_FAVORABLE_TERMS),
            landlord_favorable_terms: described_terms_present(
                &text_lower,
                LANDLORD_FAVORABLE_TERMS,
            ),
            red_flags,
            recommendations,
            risk_factors,
            mitigation_strategies,
        }
    }

    fn recommendations(
        &self,
        metrics: &BusinessMetrics,
        raw_score: f64,
        has_compliance_issues: bool,
        red_flag_count: usize,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if metrics.security_deposit > metrics.monthly_rent * 1.5 {
            recommendations.push(format!(
                "Negotiate security deposit from ${:.2} to ${:.2} (1.5x rent)",
                metrics.security_deposit,
                metrics.monthly_rent * 1.5
            ));
        }

        if metrics.notice_period_days > 30 {
            recommendations.push(format!(
                "Request notice period reduction from {} to 30 days (industry standard)",
                metrics.notice_period_days
            ));
        }

        if raw_score > self.thresholds.high {
            recommendations.push("CRITICAL: Engage legal counsel before signing".to_string());
            recommendations.push("Document all concerns in writing with landlord".to_string());
        } else if raw_score > self.thresholds.medium {
            recommendations.push("Consider legal review of high-risk clauses".to_string());
        }

        if has_compliance_issues {
            recommendations.push("Request removal of potentially illegal clauses".to_string());
        }

        if red_flag_count > RED_FLAG_LIMIT {
            recommendations
                .push("Multiple red flags detected - consider alternative properties".to_string());
        }

        recommendations
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(RiskThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RiskContribution;
    use pretty_assertions::assert_eq;
    use shared_types::Priority;

    fn scenario_a() -> BusinessMetrics {
        BusinessMetrics {
            monthly_rent: 1000.0,
            security_deposit: 2500.0,
            early_termination_penalty: 2500.0,
            notice_period_days: 90,
            ..Default::default()
        }
    }

    #[test]
    fn test_classification_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(classify(0.0, &t), RiskLevel::Low);
        assert_eq!(classify(25.0, &t), RiskLevel::Low);
        assert_eq!(classify(26.0, &t), RiskLevel::Medium);
        assert_eq!(classify(50.0, &t), RiskLevel::Medium);
        assert_eq!(classify(51.0, &t), RiskLevel::High);
        assert_eq!(classify(75.0, &t), RiskLevel::High);
        assert_eq!(classify(76.0, &t), RiskLevel::Critical);
        assert_eq!(classify(140.0, &t), RiskLevel::Critical);
    }

    #[test]
    fn test_tiered_metrics_accumulate() {
        let assessment = RiskScorer::default().assess("", &scenario_a());

        assert_eq!(assessment.risk_score, 37.0);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(assessment.financial_exposure, 7000.0);
        assert_eq!(
            assessment.risk_factors,
            BTreeMap::from([
                ("excessive_deposit".to_string(), 15.0),
                ("extended_notice".to_string(), 10.0),
                ("high_termination_penalty".to_string(), 12.0),
            ])
        );
        assert_eq!(
            assessment.red_flags,
            vec![
                "Excessive security deposit (>2x monthly rent)",
                "High early termination penalty (>2x monthly rent)",
                "Extended notice period requirement (90 days)",
            ]
        );
        let priorities: Vec<_> = assessment
            .mitigation_strategies
            .iter()
            .map(|m| m.priority)
            .collect();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_recommendations_follow_final_state() {
        let assessment = RiskScorer::default().assess("", &scenario_a());
        assert_eq!(
            assessment.recommendations,
            vec![
                "Negotiate security deposit from $2500.00 to $1500.00 (1.5x rent)",
                "Request notice period reduction from 90 to 30 days (industry standard)",
            ]
        );
    }

    #[test]
    fn test_clamped_score_keeps_critical_level() {
        let text = "adults only. waiver of habitability. no repairs by landlord. \
                    forfeit all rights. waive all claims. immediate eviction. \
                    non-refundable deposit required.";
        let assessment = RiskScorer::default().assess(text, &scenario_a());

        let raw: f64 = assessment.risk_factors.values().sum();
        assert!(raw > 100.0);
        assert_eq!(assessment.risk_score, 100.0);
        assert_eq!(assessment.risk_level, RiskLevel::Critical);
        assert!(assessment
            .recommendations
            .contains(&"CRITICAL: Engage legal counsel before signing".to_string()));
        assert!(assessment
            .recommendations
            .contains(&"Request removal of potentially illegal clauses".to_string()));
        assert_eq!(
            assessment.recommendations.last().map(String::as_str),
            Some("Multiple red flags detected - consider alternative properties")
        );
    }

    #[test]
    fn test_legal_review_between_medium_and_high() {
        let text = "no warranty is given, waiver of habitability and no repairs by landlord";
        let metrics = BusinessMetrics {
            monthly_rent: 1000.0,
            ..Default::default()
        };
        let assessment = RiskScorer::default().assess(text, &metrics);
        // 15 + 12 + 6 unfavorable, 15 habitability
        assert_eq!(assessment.risk_score, 48.0);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(
            assessment.recommendations,
            vec!["Request removal of potentially illegal clauses"]
        );

        let metrics = BusinessMetrics {
            security_deposit: 1600.0,
            ..metrics
        };
        let assessment = RiskScorer::default().assess(text, &metrics);
        assert_eq!(assessment.risk_score, 56.0);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Negotiate security deposit from $1600.00 to $1500.00 (1.5x rent)",
                "Consider legal review of high-risk clauses",
                "Request removal of potentially illegal clauses",
            ]
        );
    }

    #[test]
    fn test_favorable_terms_are_listed() {
        let text = "Month-to-month. Rent includes utilities. Automatic renewal applies.";
        let assessment = RiskScorer::default().assess(text, &BusinessMetrics::default());
        assert_eq!(
            assessment.tenant_favorable_terms,
            vec!["Utilities included in rent", "Flexible lease terms"]
        );
        assert_eq!(assessment.landlord_favorable_terms, vec!["Auto-renewal clause"]);
        assert_eq!(assessment.risk_score, 0.0);
    }

    #[test]
    fn test_protected_class_substrings_score_as_discrimination() {
        let text = "Rent is due on the 1st with a five day grace period. Property in Essex county.";
        let assessment = RiskScorer::default().assess(text, &BusinessMetrics::default());

        assert_eq!(assessment.risk_score, 25.0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(
            assessment.risk_factors,
            BTreeMap::from([("compliance_discrimination".to_string(), 25.0)])
        );
        assert_eq!(
            assessment.compliance_issues,
            vec!["Potential discrimination violation: 2 instance(s)"]
        );
        assert_eq!(
            assessment.recommendations,
            vec!["Request removal of potentially illegal clauses"]
        );
        assert_eq!(assessment.mitigation_strategies[0].priority, Priority::Critical);
    }

    struct FixedRule(f64);

    impl RiskRule for FixedRule {
        fn name(&self) -> &str {
            "fixed"
        }

        fn evaluate(&self, _: &RiskContext<'_>) -> Option<RiskContribution> {
            Some(RiskContribution::new("fixed", self.0))
        }
    }

    #[test]
    fn test_custom_rules_and_thresholds() {
        let thresholds = RiskThresholds {
            low: 5.0,
            medium: 10.0,
            high: 20.0,
        };
        let scorer = RiskScorer::with_rules(vec![Box::new(FixedRule(12.0))], thresholds);
        let assessment = scorer.assess("", &BusinessMetrics::default());
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.recommendations,
            vec!["Consider legal review of high-risk clauses"]
        );
    }
}
