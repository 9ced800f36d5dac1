//! Loading value sequences from files or command-line arguments.
//!
//! Supports plain-text files (whitespace-separated numbers), CSV files with
//! a numeric column, and values passed directly on the command line.

use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses command-line tokens into a value sequence.
pub fn parse_inline(tokens: &[String]) -> Result<Vec<f64>> {
    tokens
        .iter()
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", tok))
        })
        .collect()
}

/// Reads a value sequence from a local file.
///
/// Files with a `.csv` extension are read column-wise; everything else is
/// treated as whitespace-separated plain text. `column` selects a CSV column
/// by header name and defaults to the first column.
pub fn read_values(path: &str, column: Option<&str>) -> Result<Vec<f64>> {
    let is_csv = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let values = if is_csv {
        read_csv_column(path, column)?
    } else {
        read_plain(path)?
    };

    debug!(path, count = values.len(), "Values loaded");
    Ok(values)
}

fn read_plain(path: &str) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;

    contents
        .split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("invalid number '{}' in {}", tok, path))
        })
        .collect()
}

fn read_csv_column(path: &str, column: Option<&str>) -> Result<Vec<f64>> {
    let mut rdr =
        csv::Reader::from_path(path).with_context(|| format!("failed to read {}", path))?;

    let index = match column {
        Some(name) => rdr
            .headers()?
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow!("column '{}' not found in {}", name, path))?,
        None => 0,
    };

    let mut values = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let field = record
            .get(index)
            .ok_or_else(|| anyhow!("{}: row {} has no column {}", path, row + 2, index))?;

        let value = field
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid number '{}' at {}:{}", field, path, row + 2))?;
        values.push(value);
    }

    Ok(values)
}
