use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::info;

use crate::error::AnalyzeError;
use crate::render;
use crate::report::Report;

/// Output formats for the assembled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Formatted text report with detailed histograms
    Txt,
    /// One CSV row per analyzed column
    Csv,
    /// Nested JSON document
    Json,
}

/// Serialize the report in the requested format and deliver it: to the
/// given output path, to a file name derived from the source (csv/json
/// with no explicit path), or to stdout (txt).
pub fn export(
    report: &Report,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), AnalyzeError> {
    let rendered = match format {
        ExportFormat::Txt => render::report::full_report(report),
        ExportFormat::Csv => to_csv(report)?,
        ExportFormat::Json => to_json(report)?,
    };

    let destination = match (output, format) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, ExportFormat::Txt) => None,
        (None, ExportFormat::Csv) => Some(default_output(report, "csv")),
        (None, ExportFormat::Json) => Some(default_output(report, "json")),
    };

    match destination {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| AnalyzeError::Io {
                path: path.clone(),
                source: e,
            })?;
            info!("report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Serialize the per-column summaries as CSV, one row per column.
pub fn to_csv(report: &Report) -> Result<String, AnalyzeError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "column", "count", "missing", "min", "max", "mean", "median", "q25", "q75", "std",
            "variance", "range", "iqr", "skewness", "kurtosis", "cv",
        ])
        .map_err(|e| AnalyzeError::Serialize(e.to_string()))?;

    for col in &report.columns {
        let s = &col.stats;
        writer
            .write_record([
                col.name.clone(),
                s.count.to_string(),
                col.missing.to_string(),
                s.min.to_string(),
                s.max.to_string(),
                s.mean.to_string(),
                s.median.to_string(),
                s.q25.to_string(),
                s.q75.to_string(),
                s.std_dev.to_string(),
                s.variance.to_string(),
                s.range.to_string(),
                s.iqr.to_string(),
                opt_field(s.skewness),
                opt_field(s.kurtosis),
                opt_field(s.cv),
            ])
            .map_err(|e| AnalyzeError::Serialize(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AnalyzeError::Serialize(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AnalyzeError::Serialize(e.to_string()))
}

/// Serialize the full report structure as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String, AnalyzeError> {
    serde_json::to_string_pretty(report).map_err(|e| AnalyzeError::Serialize(e.to_string()))
}

fn opt_field(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

/// Default export file name: the source stem plus `_statistics.<ext>`.
fn default_output(report: &Report, ext: &str) -> PathBuf {
    let stem = Path::new(&report.source)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    PathBuf::from(format!("{stem}_statistics.{ext}"))
}
