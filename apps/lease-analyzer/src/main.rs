//! Lease Analyzer Binary
//!
//! Reads extracted lease text from disk, runs the analysis engine and prints JSON.

use anyhow::{Context, Result};
use clap::Parser;
use lease_analytics::{EngineConfig, LeaseAnalysisEngine};
use lease_analyzer::{analyze, load_documents, render, OutputOptions};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "lease-analyzer")]
#[command(version, about = "Business analytics for extracted lease documents")]
struct Args {
    /// TOML file overriding engine defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the portfolio report even for a single input
    #[arg(long)]
    portfolio: bool,

    /// Analyze documents on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Include the portfolio dashboard (implies --portfolio)
    #[arg(long)]
    dashboard: bool,

    /// Include a per-document action plan (implies --portfolio)
    #[arg(long)]
    actions: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Default log level; RUST_LOG directives take precedence per target
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Document records (.json) or plain-text files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the JSON report, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(args.log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting lease-analyzer v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = LeaseAnalysisEngine::new(config).context("Invalid engine configuration")?;

    let documents = load_documents(&args.inputs)?;
    tracing::info!(documents = documents.len(), parallel = args.parallel, "Loaded inputs");

    let analyses = analyze(&engine, &documents, args.parallel);
    let options = OutputOptions {
        portfolio: args.portfolio,
        dashboard: args.dashboard,
        actions: args.actions,
        pretty: args.pretty,
    };
    println!("{}", render(&engine, analyses, options, chrono::Utc::now())?);

    Ok(())
}
