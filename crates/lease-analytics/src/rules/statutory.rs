// Statutory compliance risk rules (fair housing, fee limits, habitability)
use crate::rules::{MitigationTemplate, RiskContext, RiskContribution, RiskRule};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Priority;

lazy_static! {
    static ref DISCRIMINATION_PATTERNS: Vec<Regex> = vec![
        // Unanchored: "grace" and "essex" count as matches
        Regex::new(r"race|color|religion|sex|national origin|disability|familial status").unwrap(),
        Regex::new(r"no children|adults only|mature individuals").unwrap(),
    ];

    static ref ILLEGAL_FEE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"non-refundable.*deposit").unwrap(),
        Regex::new(r"application.*fee.*\$(\d+)").unwrap(),
        Regex::new(r"processing.*fee.*\$(\d+)").unwrap(),
    ];

    static ref HABITABILITY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"as-is condition|no warranty|no guarantees").unwrap(),
        Regex::new(r"tenant.*responsible.*all.*repair").unwrap(),
    ];
}

const COMPLIANCE_STRATEGY: &str = "Consult legal counsel for compliance review";

/// One regulatory category. Any match adds the category weight once.
pub struct CompliancePatternRule {
    name: &'static str,
    category: &'static str,
    weight: f64,
    patterns: &'static [Regex],
    issue: &'static str,
}

impl CompliancePatternRule {
    /// Total matches across all of the category's patterns
    pub fn count_matches(&self, text_lower: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text_lower).count())
            .sum()
    }
}

impl RiskRule for CompliancePatternRule {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, ctx: &RiskContext<'_>) -> Option<RiskContribution> {
        let count = self.count_matches(ctx.text_lower);
        if count == 0 {
            return None;
        }

        let mut contribution =
            RiskContribution::new(format!("compliance_{}", self.category), self.weight);
        contribution.compliance_issue = Some(format!(
            "Potential {} violation: {} instance(s)",
            self.category, count
        ));
        contribution.mitigation = Some(
            MitigationTemplate {
                issue: self.issue,
                strategy: COMPLIANCE_STRATEGY,
                priority: Priority::Critical,
            }
            .to_strategy(),
        );
        Some(contribution)
    }
}

/// Get all statutory compliance rules
pub fn get_all_rules() -> Vec<Box<dyn RiskRule>> {
    vec![
        Box::new(CompliancePatternRule {
            name: "Fair housing",
            category: "discrimination",
            weight: 25.0,
            patterns: &DISCRIMINATION_PATTERNS,
            issue: "Discrimination Compliance",
        }),
        Box::new(CompliancePatternRule {
            name: "Fee limits",
            category: "illegal_fees",
            weight: 15.0,
            patterns: &ILLEGAL_FEE_PATTERNS,
            issue: "Illegal Fees Compliance",
        }),
        Box::new(CompliancePatternRule {
            name: "Habitability",
            category: "habitability",
            weight: 15.0,
            patterns: &HABITABILITY_PATTERNS,
            issue: "Habitability Compliance",
        }),
    ]
}
