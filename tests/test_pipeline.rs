//! Integration tests for the categorize → pool → export pipeline

use evmix::mixing::UsedVariables;
use evmix::pipeline::{
    categorize_dataframe, load_events, mix_events, pairs_to_dataframe, save_dataset,
    MixingConfig, CATEGORY_COLUMN,
};
use evmix::report::{export_occupancy, ExportParams};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

const EXPECTED: [Option<usize>; 8] = [
    Some(1),
    Some(41),
    Some(41),
    None,
    Some(1),
    Some(41),
    None,
    Some(57),
];

fn setup() -> (evmix::mixing::Categorizer, UsedVariables, MixingConfig) {
    let config = MixingConfig::from_json_str(common::THREE_AXIS_CONFIG).unwrap();
    let mut used = UsedVariables::new();
    let categorizer = config.to_categorizer(&mut used).unwrap();
    (categorizer, used, config)
}

#[test]
fn test_config_matches_builder() {
    let (categorizer, used, config) = setup();
    assert_eq!(categorizer, common::three_axis_builder().build().unwrap());
    assert_eq!(used.len(), 3);
    assert_eq!(config.mixing_depth, Some(3));
}

#[test]
fn test_categorize_in_memory_frame() {
    let (categorizer, used, _) = setup();
    let mut df = common::create_event_dataframe();

    let categories = categorize_dataframe(&mut df, &categorizer, &used).unwrap();
    assert_eq!(categories, EXPECTED.to_vec());

    let col = df.column(CATEGORY_COLUMN).unwrap().u64().unwrap();
    assert_eq!(col.null_count(), 2);
    assert_eq!(col.get(7), Some(57));
}

#[test]
fn test_mixing_counts() {
    let result = mix_events(&EXPECTED, 3).unwrap();

    assert_eq!(result.categorized, 6);
    assert_eq!(result.rejected, 2);
    assert_eq!(result.occupied_categories(), 3);
    // Category 1: rows 0,4 → 1 pair; category 41: rows 1,2,5 → 3 pairs
    assert_eq!(result.pairs.len(), 4);
    assert!(result.pairs.iter().all(|p| EXPECTED[p.first] == Some(p.category)));
    assert!(result.pairs.iter().all(|p| EXPECTED[p.second] == Some(p.category)));
    assert!(result.pairs.iter().all(|p| p.first < p.second));
}

#[test]
fn test_csv_roundtrip_through_pipeline() {
    let (categorizer, used, _) = setup();
    let mut df = common::create_event_dataframe();
    let (temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let (mut loaded, rows, cols, _) = load_events(&csv_path, &used, 10000).unwrap();
    assert_eq!((rows, cols), (8, 5));

    let categories = categorize_dataframe(&mut loaded, &categorizer, &used).unwrap();
    assert_eq!(categories, EXPECTED.to_vec());

    let out_path = temp_dir.path().join("events_categorized.csv");
    save_dataset(&mut loaded, &out_path).unwrap();
    let reread = common::read_csv(&out_path);
    assert_eq!(reread.width(), 6);
    let col = reread.column(CATEGORY_COLUMN).unwrap();
    assert_eq!(col.null_count(), 2);
}

#[test]
fn test_parquet_input_and_pairs_output() {
    let (categorizer, used, _) = setup();
    let mut df = common::create_event_dataframe();
    let (temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let (mut loaded, _, _, _) = load_events(&parquet_path, &used, 10000).unwrap();
    let categories = categorize_dataframe(&mut loaded, &categorizer, &used).unwrap();
    let result = mix_events(&categories, 3).unwrap();

    let pairs_path = temp_dir.path().join("pairs.parquet");
    let mut pairs_df = pairs_to_dataframe(&result.pairs).unwrap();
    save_dataset(&mut pairs_df, &pairs_path).unwrap();

    let reread = LazyFrame::scan_parquet(&pairs_path, Default::default())
        .unwrap()
        .collect()
        .unwrap();
    assert_eq!(reread.shape(), (4, 3));
}

#[test]
fn test_missing_observable_column_fails_load() {
    let (_, used, _) = setup();
    let mut df = common::create_event_dataframe().drop("psi2").unwrap();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let err = load_events(&csv_path, &used, 10000).unwrap_err();
    assert!(err.to_string().contains("psi2"), "got: {}", err);
}

#[test]
fn test_occupancy_export_file() {
    let (categorizer, _, _) = setup();
    let result = mix_events(&EXPECTED, 3).unwrap();
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("events_occupancy.json");

    let params = ExportParams {
        input_file: "events.csv",
        config_file: "binning.json",
        mixing_depth: 3,
    };
    export_occupancy(&categorizer, &result, &path, &params).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["summary"]["total_categories"], 60);
    assert_eq!(json["summary"]["occupied_categories"], 3);
    assert_eq!(json["categories"][1]["category"], 41);
    assert_eq!(json["categories"][1]["events"], 3);
    assert_eq!(json["categories"][1]["bins"][0]["variable"], "vtx_z");
    assert_eq!(json["categories"][1]["bins"][0]["bin"], 2);
}
