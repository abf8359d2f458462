mod app;
mod cli;
mod config;
mod data;
mod error;
mod export;
mod processing;
mod render;
mod report;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging; quiet keeps only warnings, verbose opens debug
    let level = if cli.quiet {
        tracing::Level::WARN
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    app::run(&cli)?;
    Ok(())
}
