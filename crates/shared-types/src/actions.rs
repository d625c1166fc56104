//! Per-document action plans: risk, revenue, compliance, market and retention playbooks

use crate::types::{Effort, MarketPosition, Priority, RiskBand, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Risk and revenue
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationStep {
    pub action: String,
    pub priority: Priority,
    pub timeline: String,
    pub cost_estimate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: usize,
    pub opportunity: String,
    pub timeline: String,
    pub impact: f64,
    pub effort: Effort,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub opportunities: usize,
    pub total_impact: f64,
}

// ============================================================================
// Compliance
// ============================================================================

/// A compliance fix ranked by how exposed the landlord is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub action: String,
    pub priority: Priority,
    pub legal_risk: RiskBand,
}

// ============================================================================
// Market intelligence
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitivePosition {
    Premium,
    Competitive,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketSharePotential {
    HighPotential,
    ModeratePotential,
    LimitedPotential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIntelligence {
    pub market_position: MarketPosition,
    /// The market analysis cost-efficiency score
    pub pricing_efficiency: f64,
    pub competitive_advantage: Vec<String>,
    pub market_share_potential: MarketSharePotential,
    pub expansion_opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIntelligenceReport {
    pub market_intelligence: MarketIntelligence,
    pub competitive_position: CompetitivePosition,
    pub pricing_recommendations: Vec<String>,
}

// ============================================================================
// Tenant retention
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionStrategy {
    pub strategy: String,
    pub timeline: String,
    pub expected_improvement: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intervention {
    pub timeline: String,
    pub action: String,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionImpact {
    pub cost_of_turnover: f64,
    pub revenue_at_risk: f64,
    pub retention_value: f64,
    /// `retention_value` weighted by the retention probability
    pub probability_weighted_impact: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionAnalysis {
    pub retention_probability: f64,
    pub churn_risk_factors: Vec<String>,
    pub retention_strategies: Vec<RetentionStrategy>,
    pub intervention_timeline: Vec<Intervention>,
    pub financial_impact: RetentionImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionPlan {
    pub retention_analysis: RetentionAnalysis,
    pub recommended_actions: Vec<String>,
}

// ============================================================================
// Bundle
// ============================================================================

/// Every playbook derived from one document analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub mitigation_steps: Vec<MitigationStep>,
    pub total_annual_potential: f64,
    /// Timeline band -> opportunity count and impact
    pub roi_timeline: BTreeMap<String, TimelineBucket>,
    pub implementation_roadmap: Vec<RoadmapPhase>,
    pub regulatory_guidance: Vec<String>,
    pub priority_actions: Vec<PriorityAction>,
    pub legal_risk: RiskLevel,
    pub compliance_actions: Vec<String>,
    pub market: MarketIntelligenceReport,
    pub retention: RetentionPlan,
}
