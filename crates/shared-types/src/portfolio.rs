//! Cross-document rollups produced by the portfolio aggregator

use crate::types::{Priority, RiskBand, RiskLevel, RevenueOpportunity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Document counts per risk level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioOpportunityKind {
    RevenueOptimization,
    RiskMitigation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOpportunity {
    #[serde(rename = "type")]
    pub kind: PortfolioOpportunityKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_impact: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_properties: Option<usize>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub total_violations: usize,
    pub avg_compliance_score: f64,
    /// Violation text -> number of documents reporting it
    pub common_issues: BTreeMap<String, usize>,
    pub properties_at_risk: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceBenchmarks {
    pub avg_monthly_rent: f64,
    pub avg_security_deposit: f64,
    pub avg_lease_value: f64,
    pub avg_risk_score: f64,
    pub portfolio_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub portfolio_size: usize,
    /// Whole dollars with thousands separators, e.g. "$31,200"
    pub annual_revenue: String,
    pub risk_assessment: RiskBand,
    pub optimization_potential: String,
    pub key_recommendations: Vec<String>,
    pub immediate_actions_required: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub total_properties: usize,
    pub total_annual_revenue: f64,
    pub total_risk_exposure: f64,
    pub risk_distribution: RiskDistribution,
    pub portfolio_risk_score: f64,
    pub optimization_opportunities: Vec<PortfolioOpportunity>,
    pub compliance_summary: ComplianceSummary,
    /// `None` for an empty portfolio
    pub performance_benchmarks: Option<PerformanceBenchmarks>,
    pub executive_summary: ExecutiveSummary,
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub total_properties: usize,
    pub total_annual_revenue: f64,
    pub avg_risk_score: f64,
    pub compliance_issues: usize,
}

/// A per-document revenue opportunity tagged with the document's position in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOpportunity {
    pub property_index: usize,
    #[serde(flatten)]
    pub opportunity: RevenueOpportunity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentAction {
    pub property_index: usize,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub avg_monthly_rent: f64,
    pub rent_range: RentRange,
    pub avg_risk_score: f64,
    pub high_risk_properties: usize,
    pub portfolio_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDashboard {
    pub overview: DashboardOverview,
    pub risk_distribution: RiskDistribution,
    pub top_opportunities: Vec<RankedOpportunity>,
    pub urgent_actions: Vec<UrgentAction>,
    pub performance_metrics: Option<PerformanceMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_records_each_level() {
        let mut distribution = RiskDistribution::default();
        distribution.record(RiskLevel::Low);
        distribution.record(RiskLevel::Critical);
        distribution.record(RiskLevel::Critical);

        assert_eq!(distribution.low, 1);
        assert_eq!(distribution.critical, 2);
        assert_eq!(distribution.total(), 3);
    }

    #[test]
    fn test_ranked_opportunity_flattens() {
        let ranked = RankedOpportunity {
            property_index: 2,
            opportunity: RevenueOpportunity {
                kind: crate::types::OpportunityKind::RentOptimization,
                description: "Below-market rent pricing".to_string(),
                annual_impact: 2400.0,
                implementation_effort: crate::types::Effort::Low,
                timeline: "30-60 days".to_string(),
            },
        };
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json["property_index"], 2);
        assert_eq!(json["type"], "rent_optimization");
        assert_eq!(json["annual_impact"], 2400.0);
    }

    #[test]
    fn test_optional_opportunity_fields_skipped() {
        let opportunity = PortfolioOpportunity {
            kind: PortfolioOpportunityKind::RiskMitigation,
            description: "Address high-risk properties".to_string(),
            potential_impact: None,
            affected_properties: Some(3),
            priority: Priority::Critical,
        };
        let json = serde_json::to_value(&opportunity).unwrap();
        assert!(json.get("potential_impact").is_none());
        assert_eq!(json["affected_properties"], 3);
        assert_eq!(json["priority"], "critical");
    }
}
