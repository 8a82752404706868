//! `ontograph-build` — Builds a knowledge graph from a YAML build descriptor.
//!
//! The descriptor names the graph model, the record directory and extension,
//! the ordered handler steps and the output file. Output ending in `.nt` is
//! written as N-Triples, anything else as Turtle.
//!
//! **Usage:**
//! ```text
//! ontograph-build --metadata <descriptor.yaml> [--log-level <filter>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ontograph_engine::{run_build, BuildSpec};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build a knowledge graph from a directory of structured records.
#[derive(Parser)]
#[command(name = "ontograph-build", about = "Build a knowledge graph from a descriptor")]
struct Args {
    /// Path to the YAML build descriptor.
    #[arg(short, long)]
    metadata: PathBuf,

    /// Log filter (`info`, `debug`, `ontograph_engine=trace`, ...).
    #[arg(long, env = "ONTOGRAPH_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let spec = BuildSpec::from_path(&args.metadata)
        .with_context(|| format!("Failed to load descriptor {}", args.metadata.display()))?;
    info!(descriptor = %args.metadata.display(), model = %spec.model_class_name, "descriptor loaded");

    let registry = ontograph_domains::registry();
    let report = run_build(&spec, &registry)
        .with_context(|| format!("Build failed for {}", args.metadata.display()))?;

    println!(
        "{}: {} records, {} triples ({} schema)",
        report.model, report.records_processed, report.total_triples, report.schema_triples
    );
    for skipped in &report.skipped {
        println!("  Skipped: {} ({})", skipped.path.display(), skipped.message);
    }
    println!("  Written: {} ({})", report.output.display(), report.format);

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).with_context(|| format!("Invalid log filter: {level}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}
