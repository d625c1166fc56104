//! Tenant retention playbook
//!
//! Churn signals come from the risk assessment; strategies and the weighted
//! financial impact come from the retention probability in the insights.

use shared_types::{
    Intervention, PortfolioInsights, RetentionAnalysis, RetentionImpact, RetentionPlan,
    RetentionStrategy, RiskAssessment,
};

const COMPLEX_LEASE_SCORE: f64 = 70.0;
const UNFAVORABLE_RED_FLAGS: usize = 3;

/// Below this probability a proactive engagement program is worthwhile
const ENGAGEMENT_BELOW: f64 = 0.7;
/// Below this probability incentives and an immediate program are warranted
const AT_RISK_BELOW: f64 = 0.6;
const CHURN_FACTORS_FOR_ASSESSMENT: usize = 2;

// Portfolio-wide estimates, not derived from the lease
const COST_OF_TURNOVER: f64 = 5_000.0;
const REVENUE_AT_RISK: f64 = 28_000.0;
const RETENTION_VALUE: f64 = 33_000.0;

pub fn churn_risk_factors(risk: &RiskAssessment) -> Vec<String> {
    let mut factors = Vec::new();
    if risk.risk_score > COMPLEX_LEASE_SCORE {
        factors.push("High lease complexity".to_string());
    }
    if risk.red_flags.len() > UNFAVORABLE_RED_FLAGS {
        factors.push("Multiple tenant-unfavorable terms".to_string());
    }
    factors
}

fn strategy(strategy: &str, timeline: &str, expected_improvement: &str) -> RetentionStrategy {
    RetentionStrategy {
        strategy: strategy.to_string(),
        timeline: timeline.to_string(),
        expected_improvement: expected_improvement.to_string(),
    }
}

pub fn retention_strategies(insights: &PortfolioInsights) -> Vec<RetentionStrategy> {
    let probability = insights.retention_probability;
    let mut strategies = Vec::new();
    if probability < ENGAGEMENT_BELOW {
        strategies.push(strategy(
            "Proactive engagement program",
            "90 days before lease expiration",
            "15-20%",
        ));
    }
    if probability < AT_RISK_BELOW {
        strategies.push(strategy(
            "Incentive program",
            "60 days before lease expiration",
            "10-15%",
        ));
    }
    strategies
}

/// Fixed renewal touchpoints, earliest first
pub fn intervention_timeline() -> Vec<Intervention> {
    [
        (
            "6 months before expiration",
            "Satisfaction survey",
            "Identify potential issues",
        ),
        (
            "90 days before expiration",
            "Renewal conversation",
            "Gauge renewal interest",
        ),
        (
            "60 days before expiration",
            "Formal renewal offer",
            "Present competitive terms",
        ),
    ]
    .into_iter()
    .map(|(timeline, action, purpose)| Intervention {
        timeline: timeline.to_string(),
        action: action.to_string(),
        purpose: purpose.to_string(),
    })
    .collect()
}

pub fn retention_impact(insights: &PortfolioInsights) -> RetentionImpact {
    RetentionImpact {
        cost_of_turnover: COST_OF_TURNOVER,
        revenue_at_risk: REVENUE_AT_RISK,
        retention_value: RETENTION_VALUE,
        probability_weighted_impact: RETENTION_VALUE * insights.retention_probability,
    }
}

pub fn retention_actions(analysis: &RetentionAnalysis) -> Vec<String> {
    let mut actions = Vec::new();
    if analysis.retention_probability < AT_RISK_BELOW {
        actions.push("Implement immediate retention program".to_string());
        actions.push("Address identified risk factors".to_string());
    }
    if analysis.churn_risk_factors.len() > CHURN_FACTORS_FOR_ASSESSMENT {
        actions.push("Conduct detailed satisfaction assessment".to_string());
    }
    actions
}

pub fn retention_plan(insights: &PortfolioInsights, risk: &RiskAssessment) -> RetentionPlan {
    let retention_analysis = RetentionAnalysis {
        retention_probability: insights.retention_probability,
        churn_risk_factors: churn_risk_factors(risk),
        retention_strategies: retention_strategies(insights),
        intervention_timeline: intervention_timeline(),
        financial_impact: retention_impact(insights),
    };
    let recommended_actions = retention_actions(&retention_analysis);
    RetentionPlan {
        retention_analysis,
        recommended_actions,
    }
}
