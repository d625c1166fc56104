// Market benchmarking and revenue opportunity detection
use crate::config::MarketBenchmarks;
use crate::patterns::TENANT_PAYS_UTILITIES;
use shared_types::{
    BusinessMetrics, Effort, MarketAnalysis, MarketPosition, NoticeFavorability, OpportunityKind,
    RevenueOpportunity,
};

/// Ceiling of each cost-efficiency sub-score
const SUB_SCORE_MAX: f64 = 25.0;
/// Sub-score awarded when a term misses its benchmark
const SUB_SCORE_PENALIZED: f64 = 10.0;

/// Rent below this share of market rent counts as under-priced
const UNDER_MARKET_SHARE: f64 = 0.95;

const PARKING_ANNUAL_IMPACT: f64 = 600.0;
const UTILITY_ANNUAL_IMPACT: f64 = 1200.0;

/// Place a value against an inclusive market band
pub fn compare_to_band(value: f64, low: f64, high: f64) -> MarketPosition {
    if value < low {
        MarketPosition::BelowMarket
    } else if value > high {
        MarketPosition::AboveMarket
    } else {
        MarketPosition::MarketRate
    }
}

/// Benchmark one lease's terms against the market
pub fn analyze_market(metrics: &BusinessMetrics, benchmarks: &MarketBenchmarks) -> MarketAnalysis {
    let pet_fee_competitiveness = if metrics.pet_fees > benchmarks.avg_pet_fee {
        MarketPosition::AboveMarket
    } else {
        MarketPosition::BelowMarket
    };

    let notice_period_favorability =
        if metrics.notice_period_days <= benchmarks.avg_notice_period_days {
            NoticeFavorability::TenantFavorable
        } else {
            NoticeFavorability::LandlordFavorable
        };

    MarketAnalysis {
        rent_vs_market: compare_to_band(
            metrics.monthly_rent,
            benchmarks.rent_band_low,
            benchmarks.rent_band_high,
        ),
        security_deposit_ratio: metrics.deposit_ratio(),
        pet_fee_competitiveness,
        notice_period_favorability,
        cost_efficiency_score: cost_efficiency(metrics, benchmarks),
    }
}

/// Four sub-scores of at most 25 each; 0 when the lease carries no monthly cost
pub fn cost_efficiency(metrics: &BusinessMetrics, benchmarks: &MarketBenchmarks) -> f64 {
    if metrics.total_monthly_cost == 0.0 {
        return 0.0;
    }

    let rent_to_deposit = if metrics.security_deposit > 0.0 {
        (metrics.monthly_rent / metrics.security_deposit * 10.0).min(SUB_SCORE_MAX)
    } else {
        SUB_SCORE_MAX
    };
    let within = |ok: bool| if ok { SUB_SCORE_MAX } else { SUB_SCORE_PENALIZED };

    rent_to_deposit
        + within(metrics.pet_fees <= benchmarks.reasonable_pet_fee)
        + within(metrics.notice_period_days <= benchmarks.avg_notice_period_days)
        + within(metrics.early_termination_penalty <= metrics.monthly_rent)
}

/// Independent checks, each adding at most one opportunity
pub fn find_opportunities(
    metrics: &BusinessMetrics,
    text: &str,
    benchmarks: &MarketBenchmarks,
) -> Vec<RevenueOpportunity> {
    let text_lower = text.to_lowercase();
    let mut opportunities = Vec::new();

    if metrics.monthly_rent < benchmarks.market_rent * UNDER_MARKET_SHARE {
        opportunities.push(RevenueOpportunity {
            kind: OpportunityKind::RentOptimization,
            description: "Below-market rent pricing".to_string(),
            annual_impact: (benchmarks.market_rent - metrics.monthly_rent) * 12.0,
            implementation_effort: Effort::Low,
            timeline: "30-60 days".to_string(),
        });
    }

    // Any mention of a fee anywhere counts as the parking already being charged for
    if text_lower.contains("parking") && !text_lower.contains("fee") {
        opportunities.push(RevenueOpportunity {
            kind: OpportunityKind::ParkingMonetization,
            description: "Unmonetized parking spaces".to_string(),
            annual_impact: PARKING_ANNUAL_IMPACT,
            implementation_effort: Effort::Medium,
            timeline: "60-90 days".to_string(),
        });
    }

    if metrics.utility_costs == 0.0 && !text_lower.contains(TENANT_PAYS_UTILITIES) {
        opportunities.push(RevenueOpportunity {
            kind: OpportunityKind::UtilityRecovery,
            description: "Implement utility cost recovery".to_string(),
            annual_impact: UTILITY_ANNUAL_IMPACT,
            implementation_effort: Effort::High,
            timeline: "90-120 days".to_string(),
        });
    }

    opportunities
}
