//! Console reporter for benchmark results
//!
//! One line per benchmark in the familiar `ns/iter (+/- spread)` layout,
//! followed by how the batch size search ended.

use anyhow::Result;
use std::fmt::Write;

use crate::runner::BenchReport;
use crate::throughput::BenchSamples;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format benchmark reports for console output
    pub fn format(reports: &[BenchReport]) -> Result<String> {
        let mut output = String::new();
        let name_width = reports.iter().map(|r| r.name.len()).max().unwrap_or(0);

        writeln!(output)?;
        writeln!(output, "running {} benchmarks", reports.len())?;
        for report in reports {
            Self::format_report(&mut output, report, name_width)?;
        }

        let converged = reports.iter().filter(|r| r.converged).count();
        writeln!(output)?;
        writeln!(
            output,
            "bench result: {} converged, {} hit the time budget",
            converged,
            reports.len() - converged
        )?;
        Ok(output)
    }

    /// Render one result line, e.g. `      325 ns/iter (+/- 12) = 1500 MB/s`
    ///
    /// Values are truncated to whole numbers.
    pub fn format_samples(samples: &BenchSamples) -> String {
        let median = samples.median_ns() as i64;
        let spread = samples.spread_ns() as i64;
        match samples.mb_s {
            Some(mb_s) => format!(
                "{:>9} ns/iter (+/- {}) = {} MB/s",
                median, spread, mb_s as u64
            ),
            None => format!("{:>9} ns/iter (+/- {})", median, spread),
        }
    }

    fn format_report(output: &mut String, report: &BenchReport, name_width: usize) -> Result<()> {
        let status = if report.converged { "✓" } else { "~" };
        writeln!(
            output,
            "bench {:<width$} {} {}",
            report.name,
            status,
            Self::format_samples(&report.samples),
            width = name_width
        )?;
        writeln!(
            output,
            "      {:<width$}   {} rounds, batch size {}, MAD {:.2}%, {}ms",
            "",
            report.rounds,
            report.final_batch_size,
            report.samples.ns_iter_summ.median_abs_dev_pct,
            report.total_duration_ms,
            width = name_width
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Summary;

    fn create_test_report(name: &str, bytes: u64, converged: bool) -> BenchReport {
        let summary = Summary {
            max: 340.9,
            min: 310.2,
            median: 325.7,
            median_abs_dev: 0.0,
            median_abs_dev_pct: 0.0,
        };
        BenchReport {
            name: name.to_string(),
            started_at: "2024-01-01T00:00:00Z".to_string(),
            total_duration_ms: 3012,
            rounds: 4,
            final_batch_size: 24_000,
            converged,
            samples: BenchSamples::new(summary, bytes),
        }
    }

    #[test]
    fn test_format_samples_without_throughput() {
        let report = create_test_report("factorial", 0, false);
        let line = ConsoleReporter::format_samples(&report.samples);

        assert_eq!(line, "      325 ns/iter (+/- 30)");
    }

    #[test]
    fn test_format_samples_with_throughput() {
        let summary = Summary::new(&[1000.0]);
        let samples = BenchSamples::new(summary, 1500);
        let line = ConsoleReporter::format_samples(&samples);

        assert_eq!(line, "     1000 ns/iter (+/- 0) = 1500 MB/s");
    }

    #[test]
    fn test_console_format_contains_names() {
        let reports = vec![
            create_test_report("factorial", 0, true),
            create_test_report("memcpy", 4096, false),
        ];
        let output = ConsoleReporter::format(&reports).unwrap();

        assert!(output.contains("running 2 benchmarks"));
        assert!(output.contains("factorial"));
        assert!(output.contains("memcpy"));
        assert!(output.contains("MB/s"));
    }

    #[test]
    fn test_console_format_summary_line() {
        let reports = vec![
            create_test_report("a", 0, true),
            create_test_report("b", 0, false),
            create_test_report("c", 0, false),
        ];
        let output = ConsoleReporter::format(&reports).unwrap();

        assert!(output.contains("1 converged, 2 hit the time budget"));
        assert!(output.contains("4 rounds, batch size 24000"));
    }

    #[test]
    fn test_console_format_empty() {
        let output = ConsoleReporter::format(&[]).unwrap();
        assert!(output.contains("running 0 benchmarks"));
    }
}
