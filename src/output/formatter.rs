//! Output formatters for test results
//!
//! Provides Table, JSON, and summary output formats.

use crate::models::ResultSet;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format a finished run
    pub fn format_results(&self, results: &ResultSet) -> String {
        match self.format {
            OutputFormat::Table => results.to_string(),
            OutputFormat::Json => serde_json::to_string(results).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(results).unwrap_or_default(),
            OutputFormat::Summary => self.format_brief(results),
        }
    }

    /// Print a finished run to stdout
    pub fn print(&self, results: &ResultSet) {
        match self.format {
            OutputFormat::Table => results.print_summary(),
            _ => println!("{}", self.format_results(results)),
        }
    }

    fn format_brief(&self, results: &ResultSet) -> String {
        let failed: Vec<&str> = results
            .outcomes()
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.name.as_str())
            .collect();

        let mut line = format!(
            "{}/{} passed ({:.1}%) in {}ms",
            results.passed,
            results.total,
            results.pass_rate(),
            results.total_duration_ms()
        );
        if !failed.is_empty() {
            line.push_str(&format!(" - failed: {}", failed.join(", ")));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        let mut results = ResultSet::new();
        results.add_result("Server Startup", true, "Server started successfully");
        results.add_result("Bid Operations", false, "No loads available for bidding");
        results
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("xml"), None);
    }

    #[test]
    fn test_json_output() {
        let output = ResultFormatter::new(OutputFormat::Json).format_results(&sample());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["outcomes"][1]["name"], "Bid Operations");
        assert_eq!(value["outcomes"][1]["passed"], false);
    }

    #[test]
    fn test_summary_output() {
        let output = ResultFormatter::new(OutputFormat::Summary).format_results(&sample());
        assert!(output.starts_with("1/2 passed (50.0%)"));
        assert!(output.ends_with("failed: Bid Operations"));
    }

    #[test]
    fn test_table_output_matches_report() {
        let results = sample();
        let output = ResultFormatter::new(OutputFormat::Table).format_results(&results);
        assert_eq!(output, results.to_string());
    }
}
