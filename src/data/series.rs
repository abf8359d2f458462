use crate::data::coerce::{self, CellValue};
use crate::data::loader::LoadedData;

/// Minimum fraction of cells that must coerce to numbers for a column to
/// count as numeric. Below this the column is skipped, not summarized.
const MIN_NUMERIC_RATIO: f64 = 0.5;

/// Ordered numeric values for one column, with the count of cells that
/// failed coercion. Immutable once built.
#[derive(Debug, Clone)]
pub struct ColumnSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub missing: usize,
}

/// Why a column was excluded from the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoNumericData,
    MostlyNonNumeric,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::NoNumericData => "no numeric data",
            SkipReason::MostlyNonNumeric => "mostly non-numeric",
        }
    }
}

/// Extract the numeric series for one column, walking either the whole
/// column or the shared sampled row set. Cells that fail coercion are
/// counted as missing, never raised.
pub fn extract_series(
    data: &LoadedData,
    col_idx: usize,
    sample: Option<&[usize]>,
) -> Result<ColumnSeries, SkipReason> {
    let raw = &data.column_data[col_idx];

    let mut values = Vec::new();
    let mut missing = 0usize;
    let mut considered = 0usize;

    let mut push = |cell: &str| {
        considered += 1;
        match coerce::coerce(cell) {
            CellValue::Number(v) => values.push(v),
            CellValue::Missing => missing += 1,
        }
    };

    match sample {
        Some(indices) => {
            for &i in indices {
                push(&raw[i]);
            }
        }
        None => {
            for cell in raw {
                push(cell);
            }
        }
    }

    if values.is_empty() {
        return Err(SkipReason::NoNumericData);
    }
    if (values.len() as f64) < MIN_NUMERIC_RATIO * considered as f64 {
        return Err(SkipReason::MostlyNonNumeric);
    }

    Ok(ColumnSeries {
        name: data.columns[col_idx].clone(),
        values,
        missing,
    })
}
