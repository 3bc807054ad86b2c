//! Event table loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::mixing::UsedVariables;

/// Scan an event table (CSV or Parquet based on extension)
///
/// `infer_schema_length` applies to CSV only; `0` means a full table scan.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Load an event table and check that every used observable has a column
///
/// Returns the collected frame together with its row count, column count and
/// estimated memory footprint in MB.
pub fn load_events(
    path: &Path,
    used: &UsedVariables,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let df = load_dataset(path, infer_schema_length)?
        .collect()
        .with_context(|| format!("Failed to read events from {}", path.display()))?;

    check_observable_columns(&df, used)?;

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    Ok((df, rows, cols, memory_mb))
}

/// Fail with the list of missing columns if an observable is absent
pub fn check_observable_columns(df: &DataFrame, used: &UsedVariables) -> Result<()> {
    let missing: Vec<&str> = used
        .iter()
        .map(|v| v.name())
        .filter(|name| df.column(name).is_err())
        .collect();

    if !missing.is_empty() {
        let available: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        anyhow::bail!(
            "Observable column(s) {:?} not found in dataset. Available columns: {:?}",
            missing,
            available
        );
    }
    Ok(())
}

/// Save a frame to CSV or Parquet based on extension
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: {}. Supported formats: csv, parquet",
            extension
        ),
    }

    Ok(())
}
