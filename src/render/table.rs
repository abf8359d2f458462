use crate::render::histogram::inline_glyphs;
use crate::report::{ColumnReport, Report};

const HEADERS: [&str; 14] = [
    "Column", "Min", "25%", "Mean", "Median", "75%", "Max", "Std", "Skew", "Kurt", "Range",
    "IQR", "CV%", "Histogram",
];

/// Render the per-column summaries as an aligned ASCII table, one row per
/// column with the inline histogram in the last cell.
pub fn summary_table(report: &Report) -> String {
    let rows: Vec<Vec<String>> = report.columns.iter().map(table_row).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_row(
        &HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(join_row(row, &widths));
    }

    lines.join("\n")
}

fn table_row(col: &ColumnReport) -> Vec<String> {
    let s = &col.stats;
    vec![
        col.name.chars().take(20).collect(),
        format!("{:.4}", s.min),
        format!("{:.4}", s.q25),
        format!("{:.4}", s.mean),
        format!("{:.4}", s.median),
        format!("{:.4}", s.q75),
        format!("{:.4}", s.max),
        format!("{:.4}", s.std_dev),
        fmt_opt(s.skewness, 3),
        fmt_opt(s.kurtosis, 3),
        format!("{:.4}", s.range),
        format!("{:.4}", s.iqr),
        s.cv
            .map_or_else(|| "-".to_string(), |cv| format!("{:.2}%", cv * 100.0)),
        inline_glyphs(&col.histogram),
    ]
}

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let pad = widths[i].saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}
