//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// evmix - Categorize events on a binned grid and pool them for event mixing
#[derive(Parser, Debug)]
#[command(name = "evmix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input event table (CSV or Parquet) with one column per observable
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Binning configuration (JSON) listing the mixing axes in order
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_categorized' suffix (e.g., events.csv → events_categorized.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Events kept per category pool when building mixed pairs.
    /// Overrides "mixing_depth" from the config file. Default: 5
    #[arg(long, value_parser = validate_mixing_depth)]
    pub mixing_depth: Option<usize>,

    /// Write the mixed pairs (category, first_row, second_row) to this file (CSV or Parquet)
    #[arg(long)]
    pub pairs_output: Option<PathBuf>,

    /// Skip writing the '_occupancy.json' category report
    #[arg(long, default_value = "false")]
    pub no_export: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a category into its per-axis bins
    Decode {
        /// Binning configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Category number to decode
        category: usize,
    },

    /// List the observables that can be used as mixing axes
    Variables,
}

impl Cli {
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    /// The derived path will be in the same directory as the input with a '_categorized' suffix.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(self.output.clone().unwrap_or_else(|| {
            let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            let extension = input
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("parquet");
            parent.join(format!("{}_categorized.{}", stem, extension))
        }))
    }

    /// Get the occupancy report path, derived from the input file.
    /// The derived path will be in the same directory as the input with a '_occupancy.json' suffix.
    pub fn occupancy_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input.file_stem().and_then(|s| s.to_str())?;
        Some(parent.join(format!("{}_occupancy.json", stem)))
    }
}

/// Validator for mixing_depth parameter
fn validate_mixing_depth(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid positive integer", s))?;

    if value == 0 {
        Err("mixing_depth must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
