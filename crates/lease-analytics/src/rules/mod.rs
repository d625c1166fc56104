//! Risk scoring rules
//!
//! Every rule is a pure check over the lease text and extracted metrics that
//! either contributes a fixed number of points or stays silent. Tiered checks
//! (deposit, termination penalty, notice period) are a single rule that
//! reports only the highest tier reached.

pub mod financial;
pub mod language;
pub mod statutory;

use shared_types::{BusinessMetrics, MitigationStrategy, Priority};

/// Inputs available to every rule
#[derive(Debug, Clone, Copy)]
pub struct RiskContext<'a> {
    /// Lowercased lease text
    pub text_lower: &'a str,
    pub metrics: &'a BusinessMetrics,
}

/// What a triggered rule adds to the assessment
#[derive(Debug, Clone, PartialEq)]
pub struct RiskContribution {
    /// Key recorded in `risk_factors`
    pub factor: String,
    pub weight: f64,
    pub red_flags: Vec<String>,
    pub compliance_issue: Option<String>,
    pub mitigation: Option<MitigationStrategy>,
}

impl RiskContribution {
    pub fn new(factor: impl Into<String>, weight: f64) -> Self {
        Self {
            factor: factor.into(),
            weight,
            red_flags: Vec::new(),
            compliance_issue: None,
            mitigation: None,
        }
    }
}

/// Static description of a mitigation strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MitigationTemplate {
    pub issue: &'static str,
    pub strategy: &'static str,
    pub priority: Priority,
}

impl MitigationTemplate {
    pub fn to_strategy(&self) -> MitigationStrategy {
        MitigationStrategy {
            issue: self.issue.to_string(),
            strategy: self.strategy.to_string(),
            priority: self.priority,
        }
    }
}

/// Trait for risk rules
pub trait RiskRule: Send + Sync {
    /// Human-readable name of the rule
    fn name(&self) -> &str;

    /// Evaluate the rule; `None` when it does not fire
    fn evaluate(&self, ctx: &RiskContext<'_>) -> Option<RiskContribution>;
}

/// The full rule set, in evaluation order
pub fn default_risk_rules() -> Vec<Box<dyn RiskRule>> {
    let mut rules: Vec<Box<dyn RiskRule>> = Vec::new();
    rules.extend(financial::get_all_rules());
    rules.extend(language::get_all_rules());
    rules.extend(statutory::get_all_rules());
    rules
}
