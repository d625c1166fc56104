//! Lease Analyzer
//!
//! Input loading and report assembly for the `lease-analyzer` binary.
//! `main.rs` only parses arguments and wires these together.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lease_analytics::{aggregate, dashboard, LeaseAnalysisEngine};
use serde::Serialize;
use shared_types::{
    ActionPlan, DocumentAnalysis, LeaseDocument, PortfolioAnalysis, PortfolioDashboard,
};
use std::fs;
use std::path::Path;

/// Read one input file.
///
/// `.json` files are parsed as a [`LeaseDocument`] record; anything else is
/// taken as already-extracted plain text. A missing id falls back to the file stem.
pub fn load_document(path: &Path) -> Result<LeaseDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut document = if is_json {
        serde_json::from_str::<LeaseDocument>(&content)
            .with_context(|| format!("Invalid document record in {}", path.display()))?
    } else {
        LeaseDocument::from_text(String::new(), content)
    };

    if document.id.is_empty() {
        document.id = document_id(path);
    }
    if document.filename.is_none() {
        document.filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
    }
    Ok(document)
}

pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LeaseDocument>> {
    paths.iter().map(|p| load_document(p.as_ref())).collect()
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Analyze every document, preserving input order either way
pub fn analyze(
    engine: &LeaseAnalysisEngine,
    documents: &[LeaseDocument],
    parallel: bool,
) -> Vec<DocumentAnalysis> {
    if parallel {
        engine.analyze_documents_parallel(documents)
    } else {
        engine.analyze_documents(documents)
    }
}

/// Multi-document output envelope
#[derive(Debug, Serialize)]
pub struct PortfolioReport {
    pub generated_at: DateTime<Utc>,
    pub individual_analyses: Vec<DocumentAnalysis>,
    pub portfolio: PortfolioAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<PortfolioDashboard>,
    /// One plan per entry of `individual_analyses`, same order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_plans: Option<Vec<ActionPlan>>,
}

impl PortfolioReport {
    pub fn build(
        engine: &LeaseAnalysisEngine,
        individual_analyses: Vec<DocumentAnalysis>,
        options: OutputOptions,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let portfolio = aggregate(&individual_analyses);
        let dashboard = options
            .dashboard
            .then(|| dashboard(&individual_analyses));
        let action_plans = options.actions.then(|| {
            individual_analyses
                .iter()
                .map(|analysis| engine.action_plan(analysis))
                .collect()
        });
        Self {
            generated_at,
            individual_analyses,
            portfolio,
            dashboard,
            action_plans,
        }
    }
}

/// What to print for a finished run
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub portfolio: bool,
    pub dashboard: bool,
    pub actions: bool,
    pub pretty: bool,
}

impl OutputOptions {
    /// Whether output needs the multi-document envelope
    fn wants_envelope(&self) -> bool {
        self.portfolio || self.dashboard || self.actions
    }
}

/// Render analyses as JSON.
///
/// A lone document without `portfolio`, `dashboard` or `actions` prints its
/// analysis directly; everything else goes through [`PortfolioReport`].
pub fn render(
    engine: &LeaseAnalysisEngine,
    mut analyses: Vec<DocumentAnalysis>,
    options: OutputOptions,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    if analyses.len() == 1 && !options.wants_envelope() {
        if let Some(analysis) = analyses.pop() {
            return to_json(&analysis, options.pretty);
        }
    }
    let report = PortfolioReport::build(engine, analyses, options, generated_at);
    to_json(&report, options.pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize analysis output")
}
