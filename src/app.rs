use tracing::debug;

use crate::cli::Cli;
use crate::data::loader;
use crate::error::AnalyzeError;
use crate::export::{self, ExportFormat};
use crate::report;

/// Run one full analysis: validate parameters, load the table, assemble
/// the report, and hand it to the export layer.
pub fn run(cli: &Cli) -> Result<(), AnalyzeError> {
    let config = cli.analyze_config();
    config.validate()?;

    let data = loader::load_csv(&cli.csv_file)?;
    debug!(
        "loaded {} rows x {} columns from {}",
        data.row_count,
        data.columns.len(),
        cli.csv_file.display()
    );

    let report = report::assemble(&cli.csv_file, &data, &config)?;
    export::export(&report, cli.export, cli.output.as_deref())?;

    if !cli.quiet && cli.export == ExportFormat::Txt && cli.output.is_none() {
        print_run_summary(cli, &report);
    }

    Ok(())
}

fn print_run_summary(cli: &Cli, report: &report::Report) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("Analysis complete");
    println!("{rule}");
    println!("  File: {}", cli.csv_file.display());
    println!("  Rows analyzed: {}", report.analyzed_rows);
    println!("  Columns analyzed: {}", report.columns.len());
    if report.analyzed_rows < report.total_rows {
        println!("  Sample size: {}", report.analyzed_rows);
    }
    println!("  Histogram bins: {}", report.bins);
    println!("{rule}");
}
