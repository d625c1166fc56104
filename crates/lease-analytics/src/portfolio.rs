//! Cross-document rollups: portfolio analysis and the executive dashboard
//!
//! Both take analyses as an ordered slice. Ranking ties keep input order, so
//! results do not depend on how the per-document work was scheduled.

use shared_types::{
    ComplianceSummary, DashboardOverview, DocumentAnalysis, ExecutiveSummary, PerformanceBenchmarks,
    PerformanceMetrics, PortfolioAnalysis, PortfolioDashboard, PortfolioOpportunity,
    PortfolioOpportunityKind, Priority, RankedOpportunity, RentRange, RiskBand, RiskDistribution,
    UrgentAction,
};
use std::collections::BTreeMap;
use tracing::info;

/// Summed opportunity impact above which a portfolio-wide revenue push is proposed
const REVENUE_OPTIMIZATION_THRESHOLD: f64 = 50_000.0;
/// Share of elevated-risk properties above which risk mitigation is proposed
const HIGH_RISK_SHARE: f64 = 0.3;
/// Compliance scores below this put a property at risk
const COMPLIANCE_AT_RISK_BELOW: f64 = 70.0;
/// Risk scores above this count as high risk on the dashboard
const DASHBOARD_HIGH_RISK_ABOVE: f64 = 70.0;

const KEY_RECOMMENDATION_COUNT: usize = 3;
const TOP_OPPORTUNITY_COUNT: usize = 5;

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Whole dollars with thousands separators, e.g. `$31,200`.
///
/// Halves round to even and the sign follows the dollar sign (`$-1,200`).
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("${}{}", sign, grouped)
}

/// Low / medium / high band for a mean portfolio risk score
pub fn portfolio_risk_band(score: f64) -> RiskBand {
    if score > 70.0 {
        RiskBand::High
    } else if score > 50.0 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

fn risk_distribution(analyses: &[DocumentAnalysis]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for analysis in analyses {
        distribution.record(analysis.risk_assessment.risk_level);
    }
    distribution
}

fn portfolio_opportunities(analyses: &[DocumentAnalysis]) -> Vec<PortfolioOpportunity> {
    let mut opportunities = Vec::new();

    let revenue_potential: f64 = analyses
        .iter()
        .flat_map(|a| &a.revenue_opportunities)
        .map(|o| o.annual_impact)
        .sum();
    if revenue_potential > REVENUE_OPTIMIZATION_THRESHOLD {
        opportunities.push(PortfolioOpportunity {
            kind: PortfolioOpportunityKind::RevenueOptimization,
            description: "Portfolio-wide revenue optimization".to_string(),
            potential_impact: Some(revenue_potential),
            affected_properties: None,
            priority: Priority::High,
        });
    }

    let high_risk = analyses
        .iter()
        .filter(|a| a.risk_assessment.risk_level.is_elevated())
        .count();
    if high_risk as f64 > analyses.len() as f64 * HIGH_RISK_SHARE {
        opportunities.push(PortfolioOpportunity {
            kind: PortfolioOpportunityKind::RiskMitigation,
            description: "Address high-risk properties".to_string(),
            potential_impact: None,
            affected_properties: Some(high_risk),
            priority: Priority::Critical,
        });
    }

    opportunities
}

fn compliance_summary(analyses: &[DocumentAnalysis]) -> ComplianceSummary {
    let mut common_issues = BTreeMap::new();
    let mut total_violations = 0;
    for analysis in analyses {
        for violation in &analysis.compliance_report.violations {
            total_violations += 1;
            *common_issues.entry(violation.clone()).or_insert(0) += 1;
        }
    }

    ComplianceSummary {
        total_violations,
        avg_compliance_score: mean(analyses.iter().map(|a| a.compliance_report.compliance_score)),
        common_issues,
        properties_at_risk: analyses
            .iter()
            .filter(|a| a.compliance_report.compliance_score < COMPLIANCE_AT_RISK_BELOW)
            .count(),
    }
}

fn performance_benchmarks(analyses: &[DocumentAnalysis]) -> Option<PerformanceBenchmarks> {
    if analyses.is_empty() {
        return None;
    }
    Some(PerformanceBenchmarks {
        avg_monthly_rent: mean(analyses.iter().map(|a| a.business_metrics.monthly_rent)),
        avg_security_deposit: mean(analyses.iter().map(|a| a.business_metrics.security_deposit)),
        avg_lease_value: mean(analyses.iter().map(|a| a.business_metrics.total_lease_value)),
        avg_risk_score: mean(analyses.iter().map(|a| a.risk_assessment.risk_score)),
        portfolio_efficiency: mean(
            analyses
                .iter()
                .map(|a| a.portfolio_insights.operational_efficiency_score),
        ),
    })
}

fn executive_summary(
    total_properties: usize,
    total_annual_revenue: f64,
    portfolio_risk_score: f64,
    opportunities: &[PortfolioOpportunity],
    compliance: &ComplianceSummary,
) -> ExecutiveSummary {
    let optimization_potential: f64 = opportunities
        .iter()
        .filter_map(|o| o.potential_impact)
        .sum();

    let mut ranked: Vec<&PortfolioOpportunity> = opportunities.iter().collect();
    ranked.sort_by(|a, b| {
        let a = a.potential_impact.unwrap_or(0.0);
        let b = b.potential_impact.unwrap_or(0.0);
        b.total_cmp(&a)
    });

    ExecutiveSummary {
        portfolio_size: total_properties,
        annual_revenue: format_currency(total_annual_revenue),
        risk_assessment: portfolio_risk_band(portfolio_risk_score),
        optimization_potential: format_currency(optimization_potential),
        key_recommendations: ranked
            .into_iter()
            .take(KEY_RECOMMENDATION_COUNT)
            .map(|o| o.description.clone())
            .collect(),
        immediate_actions_required: compliance.properties_at_risk,
    }
}

/// Roll single-document analyses up into a portfolio view.
///
/// An empty slice yields zeroed totals, a risk score of 0 and no benchmarks.
pub fn aggregate(analyses: &[DocumentAnalysis]) -> PortfolioAnalysis {
    let total_properties = analyses.len();
    let total_annual_revenue = analyses
        .iter()
        .map(|a| a.business_metrics.total_lease_value)
        .sum();
    let total_risk_exposure = analyses
        .iter()
        .map(|a| a.risk_assessment.financial_exposure)
        .sum();
    let portfolio_risk_score = mean(analyses.iter().map(|a| a.risk_assessment.risk_score));

    let optimization_opportunities = portfolio_opportunities(analyses);
    let compliance_summary = compliance_summary(analyses);
    let executive_summary = executive_summary(
        total_properties,
        total_annual_revenue,
        portfolio_risk_score,
        &optimization_opportunities,
        &compliance_summary,
    );

    info!(
        properties = total_properties,
        portfolio_risk_score, "Portfolio aggregation complete"
    );

    PortfolioAnalysis {
        total_properties,
        total_annual_revenue,
        total_risk_exposure,
        risk_distribution: risk_distribution(analyses),
        portfolio_risk_score,
        optimization_opportunities,
        compliance_summary,
        performance_benchmarks: performance_benchmarks(analyses),
        executive_summary,
    }
}

fn top_opportunities(analyses: &[DocumentAnalysis]) -> Vec<RankedOpportunity> {
    let mut all: Vec<RankedOpportunity> = analyses
        .iter()
        .enumerate()
        .flat_map(|(property_index, analysis)| {
            analysis
                .revenue_opportunities
                .iter()
                .map(move |opportunity| RankedOpportunity {
                    property_index,
                    opportunity: opportunity.clone(),
                })
        })
        .collect();
    // stable: equal impacts keep portfolio order
    all.sort_by(|a, b| {
        b.opportunity
            .annual_impact
            .total_cmp(&a.opportunity.annual_impact)
    });
    all.truncate(TOP_OPPORTUNITY_COUNT);
    all
}

fn urgent_actions(analyses: &[DocumentAnalysis]) -> Vec<UrgentAction> {
    let mut actions = Vec::new();
    for (property_index, analysis) in analyses.iter().enumerate() {
        let risk_level = analysis.risk_assessment.risk_level;
        if risk_level.is_elevated() {
            actions.push(UrgentAction {
                property_index,
                action: "Risk mitigation required".to_string(),
                risk_level: Some(risk_level),
                compliance_score: None,
                priority: Priority::Immediate,
            });
        }

        let compliance_score = analysis.compliance_report.compliance_score;
        if compliance_score < COMPLIANCE_AT_RISK_BELOW {
            actions.push(UrgentAction {
                property_index,
                action: "Compliance review required".to_string(),
                risk_level: None,
                compliance_score: Some(compliance_score),
                priority: Priority::High,
            });
        }
    }
    actions
}

fn performance_metrics(analyses: &[DocumentAnalysis]) -> Option<PerformanceMetrics> {
    let rents: Vec<f64> = analyses
        .iter()
        .map(|a| a.business_metrics.monthly_rent)
        .collect();
    let min = rents.iter().copied().reduce(f64::min)?;
    let max = rents.iter().copied().reduce(f64::max)?;
    let avg_risk_score = mean(analyses.iter().map(|a| a.risk_assessment.risk_score));

    Some(PerformanceMetrics {
        avg_monthly_rent: mean(rents.iter().copied()),
        rent_range: RentRange { min, max },
        avg_risk_score,
        high_risk_properties: analyses
            .iter()
            .filter(|a| a.risk_assessment.risk_score > DASHBOARD_HIGH_RISK_ABOVE)
            .count(),
        portfolio_efficiency: 100.0 - avg_risk_score,
    })
}

/// Executive dashboard over the same ordered analyses as [`aggregate`]
pub fn dashboard(analyses: &[DocumentAnalysis]) -> PortfolioDashboard {
    PortfolioDashboard {
        overview: DashboardOverview {
            total_properties: analyses.len(),
            total_annual_revenue: analyses
                .iter()
                .map(|a| a.business_metrics.total_lease_value)
                .sum(),
            avg_risk_score: mean(analyses.iter().map(|a| a.risk_assessment.risk_score)),
            compliance_issues: analyses
                .iter()
                .map(|a| a.compliance_report.violations.len())
                .sum(),
        },
        risk_distribution: risk_distribution(analyses),
        top_opportunities: top_opportunities(analyses),
        urgent_actions: urgent_actions(analyses),
        performance_metrics: performance_metrics(analyses),
    }
}
