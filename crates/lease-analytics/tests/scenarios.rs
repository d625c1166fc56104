//! End-to-end scenarios for single documents and portfolios
//!
//! Each scenario pins observable output (scores, levels, strings) for a fixed
//! input, so rule weights and message wording are covered as contract.

use lease_analytics::{aggregate, dashboard, EngineConfig, LeaseAnalysisEngine};
use pretty_assertions::assert_eq;
use shared_types::{
    BusinessMetrics, LeaseDocument, OpportunityKind, RiskBand, RiskDistribution, RiskLevel,
};

const STANDARD_LEASE: &str = "RESIDENTIAL LEASE AGREEMENT\n\
    This lease agreement is made between Harbor View Rentals (Landlord) and A. Chen (Tenant).\n\
    Monthly Rent: $2,407.00\n\
    Security Deposit: $2,907.00\n\
    Pet fee: $35\n\
    Late fee: $50\n\
    Application fee: $45\n\
    Tenant shall provide 30 days written notice before vacating.\n\
    This lease has a 12 month term.\n\
    Disclosures: lead paint, mold, asbestos, crime statistics.\n\
    Tenant pays utilities.";

const HOSTILE_LEASE: &str = "LEASE AGREEMENT\n\
    Monthly Rent: $1,000.00\n\
    Security Deposit: $2,500.00\n\
    Early termination fee: $2,500.00\n\
    Tenant must give 90 days notice.\n\
    Adults only. Premises are let in as-is condition.\n\
    All rules are strictly enforced with no exceptions.\n\
    Tenant agrees to hold harmless and indemnify landlord.\n\
    Landlord not responsible for any damage.";

// ============================================================================
// Scenario A: tiered metric rules accumulate
// ============================================================================

#[test]
fn scenario_a_tiered_metrics() {
    let engine = LeaseAnalysisEngine::default();
    let metrics = BusinessMetrics {
        monthly_rent: 1000.0,
        security_deposit: 2500.0,
        early_termination_penalty: 2500.0,
        notice_period_days: 90,
        ..Default::default()
    }
    .with_totals();

    let risk = engine.assess_risk("", &metrics);
    assert_eq!(risk.risk_score, 37.0);
    assert_eq!(risk.risk_level, RiskLevel::Medium);
    assert_eq!(risk.financial_exposure, 7000.0);
    assert!(risk.compliance_issues.is_empty());
}

// ============================================================================
// Scenario B: labelled amounts
// ============================================================================

#[test]
fn scenario_b_labelled_amounts() {
    let engine = LeaseAnalysisEngine::default();
    let metrics =
        engine.extract_metrics("Monthly Rent: $2,407.00\nSecurity Deposit: $2,907.00");
    assert_eq!(metrics.monthly_rent, 2407.0);
    assert_eq!(metrics.security_deposit, 2907.0);
}

// ============================================================================
// Scenario C: empty document
// ============================================================================

#[test]
fn scenario_c_empty_document() {
    let engine = LeaseAnalysisEngine::default();
    let analysis = engine.analyze_document("");

    let mut expected = BusinessMetrics::default();
    expected.recompute_totals();
    assert_eq!(analysis.business_metrics, expected);
    assert_eq!(analysis.business_metrics.extraction_confidence, 0.0);
    assert_eq!(analysis.confidence_score, 50.0);
    assert_eq!(analysis.risk_assessment.risk_score, 0.0);
    assert_eq!(analysis.risk_assessment.risk_level, RiskLevel::Low);
    assert_eq!(analysis.compliance_report.compliance_score, 80.0);
}

// ============================================================================
// Scenario D: two-document portfolio
// ============================================================================

#[test]
fn scenario_d_portfolio_mean() {
    let engine = LeaseAnalysisEngine::default();
    let mut low = engine.analyze_document("");
    low.risk_assessment.risk_score = 10.0;
    low.risk_assessment.risk_level = RiskLevel::Low;
    let mut high = engine.analyze_document("");
    high.risk_assessment.risk_score = 60.0;
    high.risk_assessment.risk_level = RiskLevel::High;

    let portfolio = aggregate(&[low, high]);
    assert_eq!(portfolio.portfolio_risk_score, 35.0);
    assert_eq!(
        portfolio.risk_distribution,
        RiskDistribution {
            low: 1,
            medium: 0,
            high: 1,
            critical: 0,
        }
    );
    assert_eq!(portfolio.executive_summary.risk_assessment, RiskBand::Low);
}

// ============================================================================
// Full documents
// ============================================================================

#[test]
fn standard_lease_end_to_end() {
    let engine = LeaseAnalysisEngine::default();
    let analysis = engine.analyze_document(STANDARD_LEASE);
    let metrics = &analysis.business_metrics;

    assert_eq!(metrics.monthly_rent, 2407.0);
    assert_eq!(metrics.security_deposit, 2907.0);
    assert_eq!(metrics.pet_fees, 35.0);
    assert_eq!(metrics.late_fee, 50.0);
    assert_eq!(metrics.application_fee, 45.0);
    assert_eq!(metrics.notice_period_days, 30);
    assert_eq!(metrics.lease_duration_months, 12);
    assert_eq!(metrics.total_monthly_cost, 2442.0);
    assert_eq!(metrics.total_lease_value, 2442.0 * 12.0);
    assert_eq!(metrics.extraction_confidence, 0.85);

    // Only the application fee pattern trips a statutory rule
    assert_eq!(analysis.risk_assessment.risk_score, 15.0);
    assert_eq!(analysis.risk_assessment.risk_level, RiskLevel::Low);
    assert_eq!(
        analysis.risk_assessment.compliance_issues,
        vec!["Potential illegal_fees violation: 1 instance(s)"]
    );

    assert_eq!(analysis.compliance_report.compliance_score, 100.0);
    let kinds: Vec<_> = analysis
        .revenue_opportunities
        .iter()
        .map(|o| o.kind)
        .collect();
    assert_eq!(kinds, vec![OpportunityKind::RentOptimization]);
    // short text: 50 base, 15 for "lease agreement", 3 per key term
    assert_eq!(analysis.confidence_score, 80.0);
}

#[test]
fn hostile_lease_end_to_end() {
    let engine = LeaseAnalysisEngine::default();
    let analysis = engine.analyze_document(HOSTILE_LEASE);
    let risk = &analysis.risk_assessment;

    assert_eq!(analysis.business_metrics.monthly_rent, 1000.0);
    assert_eq!(analysis.business_metrics.early_termination_penalty, 2500.0);
    assert_eq!(analysis.business_metrics.notice_period_days, 90);

    // 37 tiered + 5 + 5 + 8 + 10 aggressive + 8 + 7 unfavorable + 25 + 15 compliance
    assert_eq!(risk.risk_score, 100.0);
    assert_eq!(risk.risk_level, RiskLevel::Critical);
    assert!(risk
        .red_flags
        .contains(&"Aggressive lease language: 'indemnify landlord'".to_string()));
    assert!(risk
        .red_flags
        .contains(&"Tenant-unfavorable clause: 'as-is condition'".to_string()));
    assert_eq!(risk.compliance_issues.len(), 2);
    assert_eq!(
        risk.recommendations.last().map(String::as_str),
        Some("Multiple red flags detected - consider alternative properties")
    );

    assert!(analysis
        .compliance_report
        .violations
        .contains(&"Potentially discriminatory language: 'adults only'".to_string()));
}

#[test]
fn portfolio_of_documents() {
    let engine = LeaseAnalysisEngine::default();
    let documents = vec![
        LeaseDocument::from_text("standard", STANDARD_LEASE),
        LeaseDocument::from_text("hostile", HOSTILE_LEASE),
        LeaseDocument::from_text("blank", ""),
    ];

    let portfolio = engine.analyze_portfolio(&documents);
    assert_eq!(portfolio.total_properties, 3);
    assert_eq!(portfolio.risk_distribution.total(), 3);
    assert_eq!(portfolio.risk_distribution.critical, 1);
    assert_eq!(portfolio.executive_summary.portfolio_size, 3);
    assert!(portfolio.performance_benchmarks.is_some());

    let analyses = engine.analyze_documents(&documents);
    assert_eq!(aggregate(&analyses), portfolio);

    let board = dashboard(&analyses);
    assert_eq!(board.overview.total_properties, 3);
    assert!(board
        .urgent_actions
        .iter()
        .any(|a| a.property_index == 1 && a.action == "Risk mitigation required"));
    // blank document: rent optimization of 31,200 ranks first
    assert_eq!(board.top_opportunities[0].property_index, 2);
    assert_eq!(board.top_opportunities[0].opportunity.annual_impact, 31_200.0);
}

#[test]
fn config_file_overrides_thresholds() {
    let config = EngineConfig::from_toml_str(
        r#"
[risk]
low = 10
medium = 20
high = 30
"#,
    )
    .unwrap();
    let engine = LeaseAnalysisEngine::new(config).unwrap();
    let metrics = BusinessMetrics {
        monthly_rent: 1000.0,
        security_deposit: 2500.0,
        early_termination_penalty: 2500.0,
        notice_period_days: 90,
        ..Default::default()
    };
    assert_eq!(engine.assess_risk("", &metrics).risk_level, RiskLevel::Critical);
}
