//! Category occupancy export

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::mixing::{Categorizer, Variable};
use crate::pipeline::PoolingResult;

/// Metadata about the categorization run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// evmix version
    pub evmix_version: String,
    /// Input event table
    pub input_file: String,
    /// Binning configuration file
    pub config_file: String,
    /// Events kept per category pool
    pub mixing_depth: usize,
}

/// One axis of the binning grid
#[derive(Serialize)]
pub struct AxisEntry {
    pub variable: Variable,
    pub edges: Vec<f64>,
    pub bins: usize,
}

/// Bin of one axis inside a category
#[derive(Serialize)]
pub struct CategoryBin {
    pub variable: Variable,
    pub bin: usize,
    pub lower: f64,
    pub upper: f64,
}

/// Occupancy of one category with its decoded bins
#[derive(Serialize)]
pub struct CategoryEntry {
    pub category: usize,
    pub events: usize,
    pub mixed_pairs: usize,
    pub bins: Vec<CategoryBin>,
}

/// Totals of the run
#[derive(Serialize)]
pub struct ExportSummary {
    pub rows: usize,
    pub categorized: usize,
    pub rejected: usize,
    pub total_categories: usize,
    pub occupied_categories: usize,
    pub mixed_pairs: usize,
}

/// Complete occupancy export
#[derive(Serialize)]
pub struct OccupancyExport {
    pub metadata: ExportMetadata,
    pub summary: ExportSummary,
    pub axes: Vec<AxisEntry>,
    pub categories: Vec<CategoryEntry>,
}

/// Parameters for the export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub config_file: &'a str,
    pub mixing_depth: usize,
}

/// Decode every axis of `category` into its bin and edge interval.
///
/// Duplicate registrations of one variable each get their own entry.
fn decode_bins(categorizer: &Categorizer, category: usize) -> Vec<CategoryBin> {
    let Some(bins) = categorizer.decode(category) else {
        return Vec::new();
    };
    categorizer
        .axes()
        .iter()
        .zip(bins)
        .filter_map(|(axis, bin)| {
            let (lower, upper) = axis.bin_bounds(bin)?;
            Some(CategoryBin {
                variable: axis.variable(),
                bin,
                lower,
                upper,
            })
        })
        .collect()
}

/// Build the export document
pub fn build_occupancy_export(
    categorizer: &Categorizer,
    result: &PoolingResult,
    params: &ExportParams,
) -> OccupancyExport {
    let axes = categorizer
        .axes()
        .iter()
        .map(|axis| AxisEntry {
            variable: axis.variable(),
            edges: axis.edges().to_vec(),
            bins: axis.bin_count(),
        })
        .collect();

    let categories = result
        .occupancy
        .iter()
        .map(|occ| CategoryEntry {
            category: occ.category,
            events: occ.events,
            mixed_pairs: occ.mixed_pairs,
            bins: decode_bins(categorizer, occ.category),
        })
        .collect();

    OccupancyExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            evmix_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            config_file: params.config_file.to_string(),
            mixing_depth: params.mixing_depth,
        },
        summary: ExportSummary {
            rows: result.rows,
            categorized: result.categorized,
            rejected: result.rejected,
            total_categories: categorizer.total_categories(),
            occupied_categories: result.occupied_categories(),
            mixed_pairs: result.pairs.len(),
        },
        axes,
        categories,
    }
}

/// Write the occupancy export as pretty-printed JSON
pub fn export_occupancy(
    categorizer: &Categorizer,
    result: &PoolingResult,
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_occupancy_export(categorizer, result, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize category occupancy to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write category occupancy to {}",
            output_path.display()
        )
    })?;

    Ok(())
}
