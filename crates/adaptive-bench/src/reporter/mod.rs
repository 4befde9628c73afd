//! Benchmark result reporting
//!
//! This module turns [`BenchReport`]s into text, either the human-readable
//! console layout or JSON for machine consumption.
//!
//! # Example
//!
//! ```no_run
//! use adaptive_bench::reporter::{OutputFormat, Reporter};
//! use adaptive_bench::runner::BenchReport;
//!
//! # fn example(reports: Vec<BenchReport>) -> anyhow::Result<()> {
//! let reporter = Reporter::new(OutputFormat::Console);
//! reporter.report(&reports)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&reports, "results.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::runner::BenchReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for benchmark results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console output
    #[default]
    Console,
}

/// Reporter for benchmark results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, reports: &[BenchReport]) -> Result<()> {
        let output = self.format_results(reports)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, reports: &[BenchReport], path: P) -> Result<()> {
        let output = self.format_results(reports)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_results(&self, reports: &[BenchReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(reports, false),
            OutputFormat::JsonPretty => JsonReporter::format(reports, true),
            OutputFormat::Console => ConsoleReporter::format(reports),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Summary;
    use crate::throughput::BenchSamples;

    fn create_test_reports() -> Vec<BenchReport> {
        vec![BenchReport {
            name: "factorial".to_string(),
            started_at: "2024-01-01T00:00:00Z".to_string(),
            total_duration_ms: 3000,
            rounds: 4,
            final_batch_size: 20_000,
            converged: true,
            samples: BenchSamples::new(Summary::new(&[40.0, 41.0, 42.0]), 0),
        }]
    }

    #[test]
    fn test_reporter_json_format() {
        let reports = create_test_reports();
        let output = Reporter::new(OutputFormat::Json)
            .format_results(&reports)
            .unwrap();

        assert!(output.starts_with('['));
        assert!(output.contains("factorial"));
    }

    #[test]
    fn test_reporter_console_format() {
        let reports = create_test_reports();
        let output = Reporter::new(OutputFormat::Console)
            .format_results(&reports)
            .unwrap();

        assert!(output.contains("factorial"));
        assert!(output.contains("41 ns/iter (+/- 2)"));
    }

    #[test]
    fn test_write_to_file() {
        let reports = create_test_reports();
        let path = std::env::temp_dir().join(format!(
            "adaptive-bench-report-{}.json",
            std::process::id()
        ));

        Reporter::new(OutputFormat::JsonPretty)
            .write_to_file(&reports, &path)
            .unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);

        let parsed: Vec<BenchReport> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "factorial");
    }

    #[test]
    fn test_default_format() {
        let reporter = Reporter::default();
        assert_eq!(reporter.format, OutputFormat::Console);
    }
}
