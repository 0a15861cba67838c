// Export writers — CSV, plain text, and JSON renditions of a report.
//
// These mirror what the report shows, ordered by frequency descending.
// The JSON form uses the same schema as the results file, so a consumer
// can treat either interchangeably.

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnalysisResult;

/// Write a two-column CSV (question, frequency), one row per group.
pub fn write_csv(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut out = String::from("question,frequency\n");
    for group in result.sorted_by_frequency() {
        out.push_str(&csv_field(&group.question));
        out.push(',');
        out.push_str(&group.frequency.to_string());
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write one representative question per line.
pub fn write_txt(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut out = String::new();
    for group in result.sorted_by_frequency() {
        out.push_str(&group.question);
        out.push('\n');
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the full group records as JSON (the persisted schema).
pub fn write_json(result: &AnalysisResult, path: &Path) -> Result<()> {
    let sorted = AnalysisResult::new(result.sorted_by_frequency());
    let json = serde_json::to_string_pretty(&sorted).context("Failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
