// Competitive positioning and pricing advice from metrics and the market analysis
use crate::config::MarketBenchmarks;
use shared_types::{
    BusinessMetrics, CompetitivePosition, MarketAnalysis, MarketIntelligence,
    MarketIntelligenceReport, MarketPosition, MarketSharePotential,
};

/// Deposit below this multiple of rent is an advantage
const REASONABLE_DEPOSIT_MULTIPLE: f64 = 1.5;

const HIGH_SHARE_RENT: f64 = 2500.0;
const MODERATE_SHARE_RENT: f64 = 2000.0;

/// Cost efficiency below this suggests revisiting fees
const PRICING_REVIEW_BELOW: f64 = 70.0;
/// Cost efficiency below this leaves room for operational gains
const EFFICIENCY_GAIN_BELOW: f64 = 80.0;

/// Premium at or above the top of the market band, competitive inside it, value below
pub fn competitive_position(
    metrics: &BusinessMetrics,
    benchmarks: &MarketBenchmarks,
) -> CompetitivePosition {
    if metrics.monthly_rent >= benchmarks.rent_band_high {
        CompetitivePosition::Premium
    } else if metrics.monthly_rent >= benchmarks.rent_band_low {
        CompetitivePosition::Competitive
    } else {
        CompetitivePosition::Value
    }
}

pub fn pricing_recommendations(market: &MarketAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();
    if market.rent_vs_market == MarketPosition::BelowMarket {
        recommendations.push("Consider rent increase to market rate".to_string());
    }
    if market.cost_efficiency_score < PRICING_REVIEW_BELOW {
        recommendations.push("Review fee structure for optimization".to_string());
    }
    recommendations
}

pub fn competitive_advantages(
    metrics: &BusinessMetrics,
    benchmarks: &MarketBenchmarks,
) -> Vec<String> {
    let mut advantages = Vec::new();
    if metrics.pet_fees < benchmarks.avg_pet_fee {
        advantages.push("Pet-friendly pricing".to_string());
    }
    if metrics.security_deposit < metrics.monthly_rent * REASONABLE_DEPOSIT_MULTIPLE {
        advantages.push("Reasonable security deposit".to_string());
    }
    advantages
}

pub fn market_share_potential(metrics: &BusinessMetrics) -> MarketSharePotential {
    if metrics.monthly_rent >= HIGH_SHARE_RENT {
        MarketSharePotential::HighPotential
    } else if metrics.monthly_rent >= MODERATE_SHARE_RENT {
        MarketSharePotential::ModeratePotential
    } else {
        MarketSharePotential::LimitedPotential
    }
}

pub fn expansion_opportunities(market: &MarketAnalysis) -> Vec<String> {
    let mut opportunities = Vec::new();
    if market.rent_vs_market == MarketPosition::BelowMarket {
        opportunities.push("Rent optimization potential".to_string());
    }
    if market.cost_efficiency_score < EFFICIENCY_GAIN_BELOW {
        opportunities.push("Operational efficiency improvements".to_string());
    }
    opportunities
}

pub fn market_intelligence(
    metrics: &BusinessMetrics,
    market: &MarketAnalysis,
    benchmarks: &MarketBenchmarks,
) -> MarketIntelligenceReport {
    MarketIntelligenceReport {
        market_intelligence: MarketIntelligence {
            market_position: market.rent_vs_market,
            pricing_efficiency: market.cost_efficiency_score,
            competitive_advantage: competitive_advantages(metrics, benchmarks),
            market_share_potential: market_share_potential(metrics),
            expansion_opportunities: expansion_opportunities(market),
        },
        competitive_position: competitive_position(metrics, benchmarks),
        pricing_recommendations: pricing_recommendations(market),
    }
}
