use std::path::PathBuf;

use clap::Parser;

use crate::config::AnalyzeConfig;
use crate::export::ExportFormat;

/// Summary statistics and inline ASCII histograms for CSV data.
#[derive(Debug, Parser)]
#[command(name = "oxidestat", version, about)]
pub struct Cli {
    /// Path to the CSV file to analyze
    pub csv_file: PathBuf,

    /// Column names to analyze (default: all numeric columns)
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub columns: Option<Vec<String>>,

    /// Number of bins for histograms
    #[arg(short, long, default_value_t = 10, value_name = "N")]
    pub bins: usize,

    /// Sample size for large datasets (random sampling)
    #[arg(short, long, value_name = "N")]
    pub sample: Option<usize>,

    /// Seed for the sampling RNG; omit for a fresh draw each run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Width of detailed ASCII histograms in characters
    #[arg(short = 'w', long, default_value_t = 20, value_name = "CHARS")]
    pub histogram_width: usize,

    /// Export format
    #[arg(short, long, value_enum, default_value = "txt")]
    pub export: ExportFormat,

    /// Output file path for exported results
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output with progress information
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Collapse the CLI options into the pipeline configuration.
    pub fn analyze_config(&self) -> AnalyzeConfig {
        AnalyzeConfig {
            columns: self.columns.clone(),
            bins: self.bins,
            sample_size: self.sample,
            seed: self.seed,
            histogram_width: self.histogram_width,
        }
    }
}
