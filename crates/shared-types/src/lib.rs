pub mod actions;
pub mod portfolio;
pub mod types;

pub use actions::{
    ActionPlan, CompetitivePosition, Intervention, MarketIntelligence, MarketIntelligenceReport,
    MarketSharePotential, MitigationStep, PriorityAction, RetentionAnalysis, RetentionImpact,
    RetentionPlan, RetentionStrategy, RoadmapPhase, TimelineBucket,
};
pub use portfolio::{
    ComplianceSummary, DashboardOverview, ExecutiveSummary, PerformanceBenchmarks,
    PerformanceMetrics, PortfolioAnalysis, PortfolioDashboard, PortfolioOpportunity,
    PortfolioOpportunityKind, RankedOpportunity, RentRange, RiskDistribution, UrgentAction,
};
pub use types::{
    BusinessMetrics, ComplianceReport, DocumentAnalysis, Effort, ExtractionMetadata,
    InvestmentAttractiveness, LeaseDocument, MarketAnalysis, MarketPosition, MitigationStrategy,
    NoticeFavorability, OpportunityKind, PortfolioInsights, Priority, PropertyClass, RevenueOpportunity,
    RiskAssessment, RiskBand, RiskLevel,
};
