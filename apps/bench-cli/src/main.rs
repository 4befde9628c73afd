//! Adaptive benchmark CLI
//!
//! Runs the demonstration workloads through the adaptive bencher and prints
//! the results.

mod workloads;

use adaptive_bench::{AdaptiveBencher, BenchConfig, OutputFormat, Reporter};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use workloads::Workload;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Console,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Console => OutputFormat::Console,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "adaptive-bench")]
#[command(version, about = "Measure per-call cost with a self-tuning batch size")]
struct Args {
    /// Workloads to benchmark
    #[arg(short, long, value_enum, default_values_t = [Workload::Factorial])]
    workload: Vec<Workload>,

    /// TOML file with bencher tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "console")]
    format: Format,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Buffer size in bytes for the memcpy workload
    #[arg(long, default_value = "4096")]
    size: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => BenchConfig::from_file(path)?,
        None => BenchConfig::default(),
    };
    let bencher = AdaptiveBencher::with_config(config).context("Invalid bencher configuration")?;

    let mut reports = Vec::with_capacity(args.workload.len());
    for workload in &args.workload {
        tracing::info!("Benchmarking {}", workload.name());
        reports.push(bencher.run(workload.name(), workload.build(args.size)));
    }

    let reporter = Reporter::new(args.format.into());
    match &args.output {
        Some(path) => {
            reporter
                .write_to_file(&reports, path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&reports)?,
    }

    Ok(())
}
