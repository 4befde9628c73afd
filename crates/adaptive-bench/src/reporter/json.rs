//! JSON reporter for benchmark results

use crate::runner::BenchReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format benchmark reports as a JSON array
    ///
    /// # Arguments
    ///
    /// * `reports` - The benchmark reports to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(reports: &[BenchReport], pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(reports)?
        } else {
            serde_json::to_string(reports)?
        };
        Ok(output)
    }
}
