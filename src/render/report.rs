use std::path::Path;

use crate::render::histogram::detailed_lines;
use crate::render::table::summary_table;
use crate::report::Report;

const BANNER: &str =
    "================================================================================";

/// Render the full plain-text report: banner, run metadata, the summary
/// table, and a detailed histogram section per column.
pub fn full_report(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    let file_name = Path::new(&report.source)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.source.clone());

    lines.push(BANNER.to_string());
    lines.push(format!("ANALYSIS REPORT: {file_name}"));
    lines.push(format!(
        "Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!(
        "Total Rows: {}, Numeric Columns: {}",
        report.total_rows,
        report.columns.len()
    ));
    if report.analyzed_rows < report.total_rows {
        lines.push(format!("Sampled: {} rows", report.analyzed_rows));
    }
    lines.push(format!(
        "Histogram Bins: {}, Width: {} chars",
        report.bins, report.histogram_width
    ));
    lines.push(BANNER.to_string());
    lines.push(String::new());

    lines.push("SUMMARY STATISTICS:".to_string());
    lines.push(summary_table(report));
    lines.push(String::new());

    if !report.skipped.is_empty() {
        lines.push("SKIPPED COLUMNS:".to_string());
        for skipped in &report.skipped {
            lines.push(format!("  {}: {}", skipped.name, skipped.reason));
        }
        lines.push(String::new());
    }

    lines.push("DETAILED HISTOGRAMS:".to_string());
    lines.push(String::new());

    for (i, col) in report.columns.iter().enumerate() {
        let s = &col.stats;
        lines.push(format!("{}. {}:", i + 1, col.name));
        lines.push(format!("   Count: {}, Missing: {}", s.count, col.missing));
        lines.push(format!(
            "   Range: [{:.4}, {:.4}], Mean: {:.4}, Std: {:.4}",
            s.min, s.max, s.mean, s.std_dev
        ));
        lines.push("   Distribution:".to_string());
        for line in detailed_lines(&col.histogram, report.histogram_width) {
            lines.push(format!("   {line}"));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
