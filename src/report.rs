use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AnalyzeConfig;
use crate::data::loader::LoadedData;
use crate::data::sample;
use crate::data::series::extract_series;
use crate::error::AnalyzeError;
use crate::processing::histogram::Histogram;
use crate::processing::statistics::SeriesStats;

/// Statistics and histogram for one analyzed column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub missing: usize,
    pub stats: SeriesStats,
    pub histogram: Histogram,
}

/// A column left out of the report, with the reason why.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedColumn {
    pub name: String,
    pub reason: String,
}

/// The assembled analysis result: one record per eligible column in
/// selection order, plus run metadata. Read-only once built; the export
/// layer owns it from here.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub generated_at: DateTime<Local>,
    pub total_rows: usize,
    pub analyzed_rows: usize,
    pub bins: usize,
    pub histogram_width: usize,
    pub columns: Vec<ColumnReport>,
    pub skipped: Vec<SkippedColumn>,
}

/// Run the extract -> statistics + histogram pipeline over the selected
/// columns and assemble the report.
///
/// Column selection order is the explicit list when given, table order
/// otherwise. A requested name missing from the header fails the run
/// before any statistics are computed; unusable columns are recorded and
/// skipped without aborting.
pub fn assemble(
    source: &Path,
    data: &LoadedData,
    config: &AnalyzeConfig,
) -> Result<Report, AnalyzeError> {
    config.validate()?;

    let selection = select_columns(data, config)?;

    let sample_indices = match config.sample_size {
        Some(size) => sample::sample_indices(data.row_count, size, config.seed),
        None => None,
    };
    let analyzed_rows = sample_indices
        .as_ref()
        .map_or(data.row_count, |idx| idx.len());
    if analyzed_rows < data.row_count {
        info!(
            "sampled {} of {} rows for analysis",
            analyzed_rows, data.row_count
        );
    }

    let mut columns = Vec::new();
    let mut skipped = Vec::new();

    for col_idx in selection {
        let name = &data.columns[col_idx];
        match extract_series(data, col_idx, sample_indices.as_deref()) {
            Ok(series) => {
                let Some(stats) = SeriesStats::compute(&series.values) else {
                    continue; // unreachable: extract guarantees non-empty
                };
                let Some(histogram) = Histogram::build(&series.values, config.bins) else {
                    continue;
                };
                columns.push(ColumnReport {
                    name: name.clone(),
                    missing: series.missing,
                    stats,
                    histogram,
                });
            }
            Err(reason) => {
                warn!("skipping column '{}': {}", name, reason.as_str());
                skipped.push(SkippedColumn {
                    name: name.clone(),
                    reason: reason.as_str().to_string(),
                });
            }
        }
    }

    Ok(Report {
        source: source.display().to_string(),
        generated_at: Local::now(),
        total_rows: data.row_count,
        analyzed_rows,
        bins: config.bins,
        histogram_width: config.histogram_width,
        columns,
        skipped,
    })
}

/// Resolve the column selection to indices. Explicit names must all exist
/// in the header; auto-detection takes every column in table order and
/// lets the usability check sort out which are numeric.
fn select_columns(data: &LoadedData, config: &AnalyzeConfig) -> Result<Vec<usize>, AnalyzeError> {
    match &config.columns {
        Some(names) => names
            .iter()
            .map(|name| {
                data.columns
                    .iter()
                    .position(|c| c == name)
                    .ok_or_else(|| AnalyzeError::ColumnNotFound { name: name.clone() })
            })
            .collect(),
        None => Ok((0..data.columns.len()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(columns: &[&str], column_data: Vec<Vec<&str>>) -> LoadedData {
        let row_count = column_data.first().map_or(0, |c| c.len());
        LoadedData {
            columns: columns.iter().map(|s| s.to_string()).collect(),
            column_data: column_data
                .into_iter()
                .map(|col| col.into_iter().map(|s| s.to_string()).collect())
                .collect(),
            row_count,
        }
    }

    #[test]
    fn analyzes_numeric_columns_in_table_order() {
        let data = loaded(
            &["a", "label", "b"],
            vec![
                vec!["1", "2", "3"],
                vec!["x", "y", "z"],
                vec!["10", "20", "30"],
            ],
        );
        let report = assemble(Path::new("t.csv"), &data, &AnalyzeConfig::default()).unwrap();

        let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "label");
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.analyzed_rows, 3);
    }

    #[test]
    fn explicit_selection_keeps_its_order() {
        let data = loaded(
            &["a", "b"],
            vec![vec!["1", "2"], vec!["10", "20"]],
        );
        let config = AnalyzeConfig {
            columns: Some(vec!["b".into(), "a".into()]),
            ..Default::default()
        };
        let report = assemble(Path::new("t.csv"), &data, &config).unwrap();
        let names: Vec<&str> = report.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn unknown_requested_column_aborts_the_run() {
        let data = loaded(&["a"], vec![vec!["1", "2"]]);
        let config = AnalyzeConfig {
            columns: Some(vec!["nope".into()]),
            ..Default::default()
        };
        let err = assemble(Path::new("t.csv"), &data, &config).unwrap_err();
        assert!(matches!(err, AnalyzeError::ColumnNotFound { name } if name == "nope"));
    }

    #[test]
    fn all_blank_column_is_recorded_with_reason() {
        let data = loaded(
            &["empty", "x"],
            vec![vec!["", "", ""], vec!["1", "2", "3"]],
        );
        let report = assemble(Path::new("t.csv"), &data, &AnalyzeConfig::default()).unwrap();
        assert_eq!(report.columns.len(), 1);
        assert_eq!(report.skipped[0].reason, "no numeric data");
    }

    #[test]
    fn fixed_seed_makes_sampling_reproducible() {
        let cells: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let cell_refs: Vec<&str> = cells.iter().map(|s| s.as_str()).collect();
        let data = loaded(&["x"], vec![cell_refs]);
        let config = AnalyzeConfig {
            sample_size: Some(20),
            seed: Some(42),
            ..Default::default()
        };

        let a = assemble(Path::new("t.csv"), &data, &config).unwrap();
        let b = assemble(Path::new("t.csv"), &data, &config).unwrap();
        assert_eq!(a.analyzed_rows, 20);
        assert_eq!(a.columns[0].stats.mean, b.columns[0].stats.mean);
        assert_eq!(a.columns[0].histogram.counts, b.columns[0].histogram.counts);
    }

    #[test]
    fn sample_size_covering_the_table_uses_full_data() {
        let data = loaded(&["x"], vec![vec!["1", "2", "3"]]);
        let config = AnalyzeConfig {
            sample_size: Some(50),
            seed: Some(1),
            ..Default::default()
        };
        let report = assemble(Path::new("t.csv"), &data, &config).unwrap();
        assert_eq!(report.analyzed_rows, 3);
        assert_eq!(report.columns[0].stats.count, 3);
    }

    #[test]
    fn single_row_table() {
        let data = loaded(&["x"], vec![vec!["5"]]);
        let report = assemble(Path::new("t.csv"), &data, &AnalyzeConfig::default()).unwrap();
        let stats = &report.columns[0].stats;
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn invalid_bins_rejected_before_processing() {
        let data = loaded(&["x"], vec![vec!["1"]]);
        let config = AnalyzeConfig {
            bins: 0,
            ..Default::default()
        };
        assert!(matches!(
            assemble(Path::new("t.csv"), &data, &config),
            Err(AnalyzeError::InvalidBins { .. })
        ));
    }
}
