pub mod compliance;
pub mod confidence;
pub mod config;
pub mod extractors;
pub mod insights;
pub mod intelligence;
pub mod market;
pub mod patterns;
pub mod playbook;
pub mod portfolio;
pub mod retention;
pub mod risk;
pub mod rules;

pub use config::{ConfigError, EngineConfig};
pub use portfolio::{aggregate, dashboard};

use risk::RiskScorer;
use shared_types::{
    ActionPlan, BusinessMetrics, ComplianceReport, DocumentAnalysis, LeaseDocument, MarketAnalysis,
    PortfolioAnalysis, RevenueOpportunity, RiskAssessment,
};
use tracing::{debug, info};

/// LeaseAnalysisEngine entry point
///
/// Holds a validated, immutable configuration. Every analysis method is a pure
/// function of its input text, so one engine can be shared across threads.
pub struct LeaseAnalysisEngine {
    config: EngineConfig,
    scorer: RiskScorer,
}

impl LeaseAnalysisEngine {
    /// Build an engine, rejecting an invalid configuration up front
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = RiskScorer::new(config.risk);
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn extract_metrics(&self, text: &str) -> BusinessMetrics {
        extractors::extract_metrics(text, &self.config.ranges)
    }

    pub fn assess_risk(&self, text: &str, metrics: &BusinessMetrics) -> RiskAssessment {
        self.scorer.assess(text, metrics)
    }

    pub fn analyze_market(&self, metrics: &BusinessMetrics) -> MarketAnalysis {
        market::analyze_market(metrics, &self.config.market)
    }

    pub fn find_opportunities(&self, metrics: &BusinessMetrics, text: &str) -> Vec<RevenueOpportunity> {
        market::find_opportunities(metrics, text, &self.config.market)
    }

    pub fn check_compliance(&self, text: &str) -> ComplianceReport {
        compliance::check_compliance(text)
    }

    /// Risk, revenue, compliance, market and retention playbooks for a finished analysis
    pub fn action_plan(&self, analysis: &DocumentAnalysis) -> ActionPlan {
        playbook::action_plan(analysis, &self.config.market)
    }

    /// Full single-document analysis of already-extracted lease text
    pub fn analyze_document(&self, text: &str) -> DocumentAnalysis {
        let business_metrics = self.extract_metrics(text);
        let risk_assessment = self.assess_risk(text, &business_metrics);
        let market_analysis = self.analyze_market(&business_metrics);
        let portfolio_insights =
            insights::generate_insights(&business_metrics, &risk_assessment, &self.config.market);
        let revenue_opportunities = self.find_opportunities(&business_metrics, text);
        let compliance_report = self.check_compliance(text);
        let confidence_score = confidence::document_confidence(text, &self.config.confidence);

        DocumentAnalysis {
            business_metrics,
            risk_assessment,
            market_analysis,
            portfolio_insights,
            revenue_opportunities,
            compliance_report,
            confidence_score,
        }
    }

    /// Analyze one document record
    pub fn analyze_lease(&self, document: &LeaseDocument) -> DocumentAnalysis {
        debug!(document_id = %document.id, "Analyzing lease document");
        self.analyze_document(&document.full_text)
    }

    /// Analyze documents one after another, in input order
    pub fn analyze_documents(&self, documents: &[LeaseDocument]) -> Vec<DocumentAnalysis> {
        documents.iter().map(|doc| self.analyze_lease(doc)).collect()
    }

    /// Analyze documents on the rayon thread pool. Output order matches input order.
    #[cfg(feature = "parallel")]
    pub fn analyze_documents_parallel(&self, documents: &[LeaseDocument]) -> Vec<DocumentAnalysis> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|doc| self.analyze_lease(doc))
            .collect()
    }

    /// Analyze every document in order, then aggregate
    pub fn analyze_portfolio(&self, documents: &[LeaseDocument]) -> PortfolioAnalysis {
        info!(documents = documents.len(), "Analyzing portfolio");
        aggregate(&self.analyze_documents(documents))
    }
}

impl Default for LeaseAnalysisEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            scorer: RiskScorer::default(),
        }
    }
}
