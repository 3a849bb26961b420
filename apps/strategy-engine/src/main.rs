//! Strategy Engine Binary
//!
//! Reads a broker position snapshot (JSON array of leg records), clusters
//! and classifies it, and writes the clusters as JSON to stdout.
//!
//! # Usage
//!
//! ```bash
//! strategy-engine positions.json --pretty
//! strategy-engine positions.json --config strategy-engine.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `STRATEGY_ENGINE_CONFIG`: Config file path (default: strategy-engine.yaml, optional)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use strategy_engine::config::load_config;
use strategy_engine::observability::init_logging;
use strategy_engine::{AnalyzePositionsUseCase, ClassifierChain};

/// Classify brokerage positions into multi-leg option strategies.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position snapshot: a JSON array of leg records
    input: PathBuf,

    /// Path to configuration file
    #[arg(short, long, env = "STRATEGY_ENGINE_CONFIG")]
    config: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.observability.logging)?;

    tracing::info!(
        input = %args.input.display(),
        window_sizes = ?config.clustering.window_sizes,
        "Starting strategy engine"
    );

    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read snapshot '{}'", args.input.display()))?;
    let snapshot: serde_json::Value =
        serde_json::from_str(&raw).context("Snapshot is not valid JSON")?;

    let use_case = AnalyzePositionsUseCase::new(
        Arc::new(ClassifierChain::standard()),
        config.strategy_id_mapper(),
        config.clustering,
    );
    let clusters = use_case.execute_json(&snapshot)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&clusters)?
    } else {
        serde_json::to_string(&clusters)?
    };
    println!("{output}");

    Ok(())
}
