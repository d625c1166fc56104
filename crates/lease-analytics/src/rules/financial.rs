// Financial term risk rules: deposit, termination penalty, notice period, fees
use crate::rules::{MitigationTemplate, RiskContext, RiskContribution, RiskRule};
use shared_types::{BusinessMetrics, Priority};

/// How a tier renders its red flag, if it raises one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedFlag {
    Fixed(&'static str),
    ExtendedNotice,
    ExcessiveLateFee,
}

impl RedFlag {
    fn render(&self, metrics: &BusinessMetrics) -> String {
        match self {
            RedFlag::Fixed(text) => text.to_string(),
            RedFlag::ExtendedNotice => format!(
                "Extended notice period requirement ({} days)",
                metrics.notice_period_days
            ),
            RedFlag::ExcessiveLateFee => format!("Excessive late fee (${:.2})", metrics.late_fee),
        }
    }
}

/// One threshold of a tiered rule. Fires when `observed > multiple * baseline`.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub multiple: f64,
    pub factor: &'static str,
    pub weight: f64,
    pub red_flag: Option<RedFlag>,
    pub mitigation: Option<MitigationTemplate>,
}

/// A rule over one metric with mutually exclusive tiers, highest first
pub struct TieredRule {
    name: &'static str,
    observed: fn(&BusinessMetrics) -> f64,
    baseline: fn(&BusinessMetrics) -> f64,
    tiers: &'static [Tier],
}

impl TieredRule {
    /// First tier (highest) that the metrics exceed
    pub fn reached_tier(&self, metrics: &BusinessMetrics) -> Option<&'static Tier> {
        let observed = (self.observed)(metrics);
        let baseline = (self.baseline)(metrics);
        self.tiers
            .iter()
            .find(|tier| observed > tier.multiple * baseline)
    }
}

impl RiskRule for TieredRule {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, ctx: &RiskContext<'_>) -> Option<RiskContribution> {
        let tier = self.reached_tier(ctx.metrics)?;
        let mut contribution = RiskContribution::new(tier.factor, tier.weight);
        if let Some(flag) = tier.red_flag {
            contribution.red_flags.push(flag.render(ctx.metrics));
        }
        contribution.mitigation = tier.mitigation.map(|m| m.to_strategy());
        Some(contribution)
    }
}

const DEPOSIT_TIERS: &[Tier] = &[
    Tier {
        multiple: 2.0,
        factor: "excessive_deposit",
        weight: 15.0,
        red_flag: Some(RedFlag::Fixed(
            "Excessive security deposit (>2x monthly rent)",
        )),
        mitigation: Some(MitigationTemplate {
            issue: "High security deposit",
            strategy: "Negotiate deposit reduction to 1.5x monthly rent",
            priority: Priority::High,
        }),
    },
    Tier {
        multiple: 1.5,
        factor: "high_deposit",
        weight: 8.0,
        red_flag: None,
        mitigation: None,
    },
];

const TERMINATION_TIERS: &[Tier] = &[
    Tier {
        multiple: 2.0,
        factor: "high_termination_penalty",
        weight: 12.0,
        red_flag: Some(RedFlag::Fixed(
            "High early termination penalty (>2x monthly rent)",
        )),
        mitigation: Some(MitigationTemplate {
            issue: "Excessive termination penalty",
            strategy: "Request cap at 1 month rent or prorated amount",
            priority: Priority::Medium,
        }),
    },
    Tier {
        multiple: 1.0,
        factor: "termination_penalty",
        weight: 6.0,
        red_flag: None,
        mitigation: None,
    },
];

const NOTICE_TIERS: &[Tier] = &[
    Tier {
        multiple: 60.0,
        factor: "extended_notice",
        weight: 10.0,
        red_flag: Some(RedFlag::ExtendedNotice),
        mitigation: Some(MitigationTemplate {
            issue: "Long notice period",
            strategy: "Negotiate reduction to 30 days standard notice",
            priority: Priority::Low,
        }),
    },
    Tier {
        multiple: 45.0,
        factor: "long_notice",
        weight: 5.0,
        red_flag: None,
        mitigation: None,
    },
];

const LATE_FEE_TIERS: &[Tier] = &[Tier {
    multiple: 0.1,
    factor: "excessive_late_fee",
    weight: 8.0,
    red_flag: Some(RedFlag::ExcessiveLateFee),
    mitigation: None,
}];

const APPLICATION_FEE_TIERS: &[Tier] = &[Tier {
    multiple: 100.0,
    factor: "high_application_fee",
    weight: 5.0,
    red_flag: None,
    mitigation: None,
}];

fn rent(m: &BusinessMetrics) -> f64 {
    m.monthly_rent
}

fn unit(_: &BusinessMetrics) -> f64 {
    1.0
}

/// Get all financial risk rules
pub fn get_all_rules() -> Vec<Box<dyn RiskRule>> {
    vec![
        Box::new(TieredRule {
            name: "Security deposit ratio",
            observed: |m| m.security_deposit,
            baseline: rent,
            tiers: DEPOSIT_TIERS,
        }),
        Box::new(TieredRule {
            name: "Early termination penalty",
            observed: |m| m.early_termination_penalty,
            baseline: rent,
            tiers: TERMINATION_TIERS,
        }),
        Box::new(TieredRule {
            name: "Notice period length",
            observed: |m| f64::from(m.notice_period_days),
            baseline: unit,
            tiers: NOTICE_TIERS,
        }),
        Box::new(TieredRule {
            name: "Late fee",
            observed: |m| m.late_fee,
            baseline: rent,
            tiers: LATE_FEE_TIERS,
        }),
        Box::new(TieredRule {
            name: "Application fee",
            observed: |m| m.application_fee,
            baseline: unit,
            tiers: APPLICATION_FEE_TIERS,
        }),
    ]
}
