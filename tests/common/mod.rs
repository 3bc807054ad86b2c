//! Shared test utilities and fixture generators

#![allow(dead_code)]

use evmix::mixing::{Categorizer, CategorizerBuilder, UsedVariables, Variable};
use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Centrality `[0, 10, 20, 30]` (3 bins) then vertex Z `[-1, 1]` (1 bin)
pub fn worked_example() -> (Categorizer, UsedVariables) {
    let mut used = UsedVariables::new();
    let mut builder = CategorizerBuilder::new();
    builder
        .register(Variable::CentFt0c, vec![0.0, 10.0, 20.0, 30.0], &mut used)
        .unwrap()
        .register(Variable::VtxZ, vec![-1.0, 1.0], &mut used)
        .unwrap();
    (builder.build().unwrap(), used)
}

/// Three irregular axes: vertex Z (4 bins), centrality (5 bins), event plane (3 bins)
pub fn three_axis_builder() -> CategorizerBuilder {
    let mut used = UsedVariables::new();
    let mut builder = CategorizerBuilder::new();
    builder
        .register(Variable::VtxZ, vec![-10.0, -5.0, 0.0, 2.5, 10.0], &mut used)
        .unwrap()
        .register(
            Variable::CentFt0c,
            vec![0.0, 5.0, 10.0, 30.0, 50.0, 90.0],
            &mut used,
        )
        .unwrap()
        .register(Variable::Psi2, vec![-1.6, -0.5, 0.5, 1.6], &mut used)
        .unwrap();
    builder
}

/// Binning config JSON matching [`three_axis_builder`]
pub const THREE_AXIS_CONFIG: &str = r#"{
    "axes": [
        { "variable": "vtx_z", "edges": [-10, -5, 0, 2.5, 10] },
        { "variable": "cent_ft0c", "edges": [0, 5, 10, 30, 50, 90] },
        { "variable": "psi2", "edges": [-1.6, -0.5, 0.5, 1.6] }
    ],
    "mixing_depth": 3
}"#;

/// Small event table with two out-of-range rows (vtx_z = 12, cent null)
pub fn create_event_dataframe() -> DataFrame {
    df! {
        "event_id" => [1i64, 2, 3, 4, 5, 6, 7, 8],
        "vtx_z" => [Some(-7.0f64), Some(1.0), Some(1.2), Some(12.0), Some(-7.5), Some(1.1), Some(0.0), Some(3.0)],
        "cent_ft0c" => [Some(2.0f64), Some(40.0), Some(45.0), Some(10.0), Some(3.0), Some(41.0), None, Some(60.0)],
        "psi2" => [0.0f64, 1.0, 1.2, 0.0, 0.1, 0.6, 0.0, -1.0],
        "mult_tpc" => [100i32, 200, 300, 400, 500, 600, 700, 800],
    }
    .unwrap()
}

/// Write a config file into `dir` and return its path
pub fn write_config(dir: &TempDir, json: &str) -> PathBuf {
    let path = dir.path().join("binning.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("events.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("events.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Read back a CSV written by the pipeline
pub fn read_csv(path: &std::path::Path) -> DataFrame {
    LazyCsvReader::new(path).finish().unwrap().collect().unwrap()
}
