// Per-property portfolio insights derived from metrics and the risk assessment
use crate::config::MarketBenchmarks;
use shared_types::{
    BusinessMetrics, InvestmentAttractiveness, PortfolioInsights, PropertyClass, RiskAssessment,
};

const LUXURY_RENT: f64 = 3000.0;
const MID_MARKET_RENT: f64 = 2000.0;

const BASE_RETENTION: f64 = 0.7;
const MIN_RETENTION: f64 = 0.1;

const PREMIUM_RENT: f64 = 2500.0;
const FULL_YEAR_MONTHS: u32 = 12;

pub fn classify_property(metrics: &BusinessMetrics) -> PropertyClass {
    if metrics.monthly_rent >= LUXURY_RENT {
        PropertyClass::Luxury
    } else if metrics.monthly_rent >= MID_MARKET_RENT {
        PropertyClass::MidMarket
    } else {
        PropertyClass::Affordable
    }
}

/// Likelihood that the tenant renews, never below 0.1
pub fn retention_probability(metrics: &BusinessMetrics, risk: &RiskAssessment) -> f64 {
    let mut penalty = risk.risk_score / 100.0 * 0.3;
    if metrics.monthly_rent > 0.0 && metrics.deposit_ratio() > 2.0 {
        penalty += 0.1;
    }
    if metrics.notice_period_days > 60 {
        penalty += 0.1;
    }
    (BASE_RETENTION - penalty).max(MIN_RETENTION)
}

/// Annual upside of moving rent to market; 0 when rent is unknown or already above
pub fn revenue_potential(metrics: &BusinessMetrics, benchmarks: &MarketBenchmarks) -> f64 {
    if metrics.monthly_rent > 0.0 {
        ((benchmarks.market_rent - metrics.monthly_rent) * 12.0).max(0.0)
    } else {
        0.0
    }
}

pub fn operational_efficiency(risk: &RiskAssessment) -> f64 {
    (100.0 - risk.risk_score).max(0.0)
}

pub fn investment_attractiveness(
    metrics: &BusinessMetrics,
    risk: &RiskAssessment,
) -> InvestmentAttractiveness {
    let mut score = 100.0 - risk.risk_score;
    if metrics.monthly_rent >= PREMIUM_RENT {
        score += 10.0;
    }
    if metrics.lease_duration_months >= FULL_YEAR_MONTHS {
        score += 5.0;
    }

    if score >= 80.0 {
        InvestmentAttractiveness::HighlyAttractive
    } else if score >= 60.0 {
        InvestmentAttractiveness::Attractive
    } else if score >= 40.0 {
        InvestmentAttractiveness::Moderate
    } else {
        InvestmentAttractiveness::Unattractive
    }
}

/// 50 plus one point per $100 of rent, kept within 15..=85
pub fn portfolio_fit(metrics: &BusinessMetrics) -> f64 {
    (50.0 + metrics.monthly_rent / 100.0).clamp(15.0, 85.0)
}

pub fn generate_insights(
    metrics: &BusinessMetrics,
    risk: &RiskAssessment,
    benchmarks: &MarketBenchmarks,
) -> PortfolioInsights {
    PortfolioInsights {
        property_classification: classify_property(metrics),
        retention_probability: retention_probability(metrics, risk),
        revenue_optimization_potential: revenue_potential(metrics, benchmarks),
        operational_efficiency_score: operational_efficiency(risk),
        investment_attractiveness: investment_attractiveness(metrics, risk),
        portfolio_fit_score: portfolio_fit(metrics),
    }
}
