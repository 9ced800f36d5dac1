//! CLI entry point for the seqstats tool.
//!
//! Computes the average, population variance, and standard deviation of a
//! sequence of numbers read from a file or given inline, and optionally
//! appends the summary to a CSV log.

use anyhow::Result;
use clap::Parser;
use seqstats::input::{parse_inline, read_values};
use seqstats::output::{append_record, print_json, print_pretty};
use seqstats::summary::Summary;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seqstats")]
#[command(about = "Descriptive statistics for a sequence of numbers", long_about = None)]
struct Cli {
    /// Path to a plain-text or CSV file, or the values themselves
    #[arg(value_name = "FILE_OR_VALUES", required = true, allow_hyphen_values = true)]
    inputs: Vec<String>,

    /// CSV column to read, by header name (defaults to the first column)
    #[arg(short, long)]
    column: Option<String>,

    /// CSV file to append the summary to
    #[arg(short, long)]
    output: Option<String>,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (values, source) = load(&cli)?;
    let summary = Summary::compute(&values)?.with_source(&source);

    if cli.json {
        print_json(&summary)?;
    } else {
        print_pretty(&summary);
    }

    if let Some(path) = &cli.output {
        append_record(path, &summary)?;
        info!(path = %path, "Summary appended");
    }

    Ok(())
}

/// Loads values from a file path when one was given, otherwise parses the
/// arguments themselves as numbers.
fn load(cli: &Cli) -> Result<(Vec<f64>, String)> {
    if cli.inputs.len() == 1 && Path::new(&cli.inputs[0]).exists() {
        let path = &cli.inputs[0];
        Ok((read_values(path, cli.column.as_deref())?, path.clone()))
    } else {
        Ok((parse_inline(&cli.inputs)?, "inline".to_string()))
    }
}
