use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an analysis run. Cell-level and column-level problems
/// never appear here: malformed cells become missing values and unusable
/// columns are recorded in the report's skip list instead.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{path}' contains no data rows")]
    EmptyTable { path: PathBuf },

    #[error("column '{name}' not found in header")]
    ColumnNotFound { name: String },

    #[error("bin count must be at least 1, got {value}")]
    InvalidBins { value: usize },

    #[error("sample size must be at least 1, got {value}")]
    InvalidSampleSize { value: usize },

    #[error("histogram width must be at least 1, got {value}")]
    InvalidWidth { value: usize },

    #[error("failed to serialize report: {0}")]
    Serialize(String),
}
