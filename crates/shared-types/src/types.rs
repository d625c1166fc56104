use std::collections::BTreeMap;

/// A lease whose text has already been extracted from the source PDF/scan.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LeaseDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub full_text: String,
    #[serde(default)]
    pub metadata: ExtractionMetadata,
}

impl LeaseDocument {
    pub fn from_text(id: impl Into<String>, full_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_text: full_text.into(),
            ..Self::default()
        }
    }
}

/// Page metadata reported by the extraction step. Carried through, never inspected.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtractionMetadata {
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub ocr_applied: bool,
}

/// Financial and temporal terms found in a lease.
///
/// `total_monthly_cost` and `total_lease_value` are derived from the component
/// fields; call [`BusinessMetrics::recompute_totals`] after changing any component.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BusinessMetrics {
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub pet_fees: f64,
    pub utility_costs: f64,
    pub total_monthly_cost: f64,
    pub lease_duration_months: u32,
    pub total_lease_value: f64,
    pub notice_period_days: u32,
    pub early_termination_penalty: f64,
    pub late_fee: f64,
    pub application_fee: f64,
    pub parking_fee: f64,
    pub extraction_confidence: f64,
}

impl BusinessMetrics {
    pub fn recompute_totals(&mut self) {
        self.total_monthly_cost =
            self.monthly_rent + self.pet_fees + self.utility_costs + self.parking_fee;
        self.total_lease_value = if self.lease_duration_months > 0 {
            self.total_monthly_cost * f64::from(self.lease_duration_months)
        } else {
            0.0
        };
    }

    /// Consume and return with derived fields brought up to date.
    pub fn with_totals(mut self) -> Self {
        self.recompute_totals();
        self
    }

    /// Security deposit as a multiple of monthly rent, 0 when rent is unknown.
    pub fn deposit_ratio(&self) -> f64 {
        if self.monthly_rent > 0.0 {
            self.security_deposit / self.monthly_rent
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

/// Three-way band used for compliance risk and the executive summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Immediate,
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MitigationStrategy {
    pub issue: String,
    pub strategy: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Raw rule total clamped to [0, 100]. `risk_level` is classified from the unclamped total.
    pub risk_score: f64,
    pub financial_exposure: f64,
    pub compliance_issues: Vec<String>,
    pub tenant_favorable_terms: Vec<String>,
    pub landlord_favorable_terms: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    /// Factor name -> points contributed. Values sum to the unclamped score.
    pub risk_factors: BTreeMap<String, f64>,
    pub mitigation_strategies: Vec<MitigationStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    BelowMarket,
    MarketRate,
    AboveMarket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeFavorability {
    TenantFavorable,
    LandlordFavorable,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarketAnalysis {
    pub rent_vs_market: MarketPosition,
    pub security_deposit_ratio: f64,
    pub pet_fee_competitiveness: MarketPosition,
    pub notice_period_favorability: NoticeFavorability,
    /// Sum of four sub-scores capped at 25 each.
    pub cost_efficiency_score: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComplianceReport {
    pub compliance_score: f64,
    pub violations: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskBand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityKind {
    RentOptimization,
    ParkingMonetization,
    UtilityRecovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevenueOpportunity {
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub description: String,
    pub annual_impact: f64,
    pub implementation_effort: Effort,
    pub timeline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyClass {
    Luxury,
    MidMarket,
    Affordable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentAttractiveness {
    HighlyAttractive,
    Attractive,
    Moderate,
    Unattractive,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortfolioInsights {
    pub property_classification: PropertyClass,
    pub retention_probability: f64,
    pub revenue_optimization_potential: f64,
    pub operational_efficiency_score: f64,
    pub investment_attractiveness: InvestmentAttractiveness,
    pub portfolio_fit_score: f64,
}

/// Everything the engine derives from one lease.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentAnalysis {
    pub business_metrics: BusinessMetrics,
    pub risk_assessment: RiskAssessment,
    pub market_analysis: MarketAnalysis,
    pub portfolio_insights: PortfolioInsights,
    pub revenue_opportunities: Vec<RevenueOpportunity>,
    pub compliance_report: ComplianceReport,
    /// Document-quality heuristic, distinct from `extraction_confidence`.
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_follow_components() {
        let metrics = BusinessMetrics {
            monthly_rent: 1500.0,
            pet_fees: 35.0,
            utility_costs: 120.0,
            parking_fee: 50.0,
            lease_duration_months: 12,
            ..Default::default()
        }
        .with_totals();

        assert_eq!(metrics.total_monthly_cost, 1705.0);
        assert_eq!(metrics.total_lease_value, 1705.0 * 12.0);
    }

    #[test]
    fn test_lease_value_zero_without_duration() {
        let mut metrics = BusinessMetrics {
            monthly_rent: 900.0,
            lease_duration_months: 6,
            ..Default::default()
        }
        .with_totals();
        assert_eq!(metrics.total_lease_value, 5400.0);

        metrics.lease_duration_months = 0;
        metrics.recompute_totals();
        assert_eq!(metrics.total_lease_value, 0.0);
        assert_eq!(metrics.total_monthly_cost, 900.0);
    }

    #[test]
    fn test_deposit_ratio_guards_zero_rent() {
        let metrics = BusinessMetrics {
            security_deposit: 1000.0,
            ..Default::default()
        };
        assert_eq!(metrics.deposit_ratio(), 0.0);
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&MarketPosition::BelowMarket).unwrap(),
            "\"below_market\""
        );
        assert_eq!(
            serde_json::to_string(&OpportunityKind::ParkingMonetization).unwrap(),
            "\"parking_monetization\""
        );
    }

    #[test]
    fn test_opportunity_kind_serializes_as_type() {
        let opportunity = RevenueOpportunity {
            kind: OpportunityKind::UtilityRecovery,
            description: "Implement utility cost recovery".to_string(),
            annual_impact: 1200.0,
            implementation_effort: Effort::High,
            timeline: "90-120 days".to_string(),
        };
        let json = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(json["type"], "utility_recovery");
        assert_eq!(json["implementation_effort"], "high");
    }

    #[test]
    fn test_document_deserializes_with_missing_fields() {
        let doc: LeaseDocument = serde_json::from_str(r#"{"full_text": "Monthly Rent: $900"}"#).unwrap();
        assert_eq!(doc.full_text, "Monthly Rent: $900");
        assert!(doc.id.is_empty());
        assert_eq!(doc.metadata, ExtractionMetadata::default());
    }
}
