//! JSON rendering of scan results.

use crate::domain::ScanResult;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    suggestions: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total_files_scanned: usize,
    files_suggested: usize,
    entries_skipped: usize,
}

/// Render a scan result as a pretty-printed JSON document.
pub fn render_json(result: &ScanResult) -> Result<String> {
    let report = JsonReport {
        error: result.error().map(ToString::to_string),
        suggestions: result.suggestions(),
        summary: JsonSummary {
            total_files_scanned: result.total_scanned(),
            files_suggested: result.suggested_count(),
            entries_skipped: result.entries_skipped(),
        },
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
