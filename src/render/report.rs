//! Plain-text report rendering.

use crate::domain::ScanResult;

const REPORT_TITLE: &str = "FILE CLEANING AGENT REPORT";
const RULE_WIDTH: usize = 60;

/// Render a scan result as the fixed-format text report.
///
/// Failed scans render as a single `Error: ...` line with no banner.
pub fn format_report(result: &ScanResult) -> String {
    let summary = match result {
        ScanResult::Failed(err) => return format!("Error: {}", err),
        ScanResult::Completed(summary) => summary,
    };

    let banner = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        banner.clone(),
        REPORT_TITLE.to_string(),
        banner.clone(),
        format!("Total files scanned: {}", summary.total_scanned),
        format!("Files suggested for deletion: {}", summary.suggested_count()),
        String::new(),
    ];

    if summary.suggestions.is_empty() {
        lines.push("No files suggested for deletion.".to_string());
    } else {
        lines.push("Suggested files to delete:".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        lines.extend(summary.suggestions.iter().map(|path| format!("  - {}", path)));
    }

    lines.push(banner);
    lines.join("\n")
}
