use std::path::Path;

use crate::error::AnalyzeError;

/// Result of loading a data file: column names and raw string cells.
#[derive(Debug)]
pub struct LoadedData {
    pub columns: Vec<String>,
    pub column_data: Vec<Vec<String>>, // column-major: column_data[col_idx][row_idx]
    pub row_count: usize,
}

/// Load a delimited text file and return column names and raw string data.
/// The first row is the header; every later row is data. Short rows are
/// padded with empty cells, extra cells are dropped.
pub fn load_csv(path: &Path) -> Result<LoadedData, AnalyzeError> {
    let content = std::fs::read(path).map_err(|e| AnalyzeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Try UTF-8 first, then latin1 (each byte maps to the same code point)
    let text = String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| AnalyzeError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if !row.is_empty() {
            all_rows.push(row);
        }
    }

    if all_rows.len() < 2 {
        // Header alone is not a table
        return Err(AnalyzeError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<String> = all_rows[0].iter().map(|s| s.trim().to_string()).collect();
    let data_rows = &all_rows[1..];
    let num_cols = columns.len();
    let row_count = data_rows.len();

    // Convert to column-major format
    let mut column_data: Vec<Vec<String>> = vec![Vec::with_capacity(row_count); num_cols];
    for row in data_rows {
        for (col_idx, col_data) in column_data.iter_mut().enumerate() {
            if col_idx < row.len() {
                col_data.push(row[col_idx].clone());
            } else {
                col_data.push(String::new());
            }
        }
    }

    Ok(LoadedData {
        columns,
        column_data,
        row_count,
    })
}
