//! evmix: Event Categorization CLI Tool
//!
//! Reads an event table, assigns every event to a mixing category and
//! builds mixed pairs from category pools.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use evmix::cli::decode::{run_decode, run_variables};
use evmix::cli::{Cli, Commands};
use evmix::mixing::UsedVariables;
use evmix::pipeline::{
    categorize_dataframe, load_events, mix_events, pairs_to_dataframe, save_dataset,
    MixingConfig, DEFAULT_MIXING_DEPTH,
};
use evmix::report::{export_occupancy, CategorizationSummary, ExportParams};
use evmix::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
    print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Decode { config, category } => run_decode(config, *category),
            Commands::Variables => run_variables(),
        };
    }

    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let config_path = cli.config().ok_or_else(|| {
        anyhow::anyhow!("Binning config is required. Use -c/--config to specify a JSON file.")
    })?;
    let output_path = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("Could not derive an output path from the input"))?;

    // Registration: every axis announces its observable to the registry
    let config = MixingConfig::from_path(config_path)?;
    let mut used = UsedVariables::new();
    let categorizer = config.to_categorizer(&mut used)?;
    let mixing_depth = cli
        .mixing_depth
        .or(config.mixing_depth)
        .unwrap_or(DEFAULT_MIXING_DEPTH);

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        input,
        config_path,
        &output_path,
        categorizer.axes().len(),
        categorizer.total_categories(),
        mixing_depth,
    );

    let mut summary = CategorizationSummary::new(categorizer.total_categories(), mixing_depth);

    // Step 1: Load events
    print_step_header(1, "Load Events");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading event table...");
    let (mut df, rows, cols, memory_mb) = load_events(input, &used, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Events loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    let elapsed = step_start.elapsed();
    summary.set_load_time(elapsed);
    print_step_time(elapsed);

    // Step 2: Categorize
    print_step_header(2, "Categorize Events");
    let step_start = Instant::now();
    let spinner = create_spinner("Assigning categories...");
    let categories = categorize_dataframe(&mut df, &categorizer, &used)?;
    let rejected = categories.iter().filter(|c| c.is_none()).count();
    if rejected == 0 {
        finish_with_success(&spinner, "All events categorized");
    } else {
        finish_with_warning(&spinner, "Categorization complete");
        print_count(
            "event(s) outside the binning range",
            rejected,
            Some("(no category)"),
        );
    }
    let elapsed = step_start.elapsed();
    summary.set_categorize_time(elapsed);
    print_step_time(elapsed);

    // Step 3: Pool and mix
    print_step_header(3, "Event Mixing");
    let step_start = Instant::now();
    let result = mix_events(&categories, mixing_depth)?;
    summary.add_pooling(&result);
    if result.pairs.is_empty() {
        print_info("No category holds more than one event, no mixed pairs");
    } else {
        print_count(
            "mixed pair(s)",
            result.pairs.len(),
            Some(&format!("(pool depth {})", mixing_depth)),
        );
    }
    let elapsed = step_start.elapsed();
    summary.set_mixing_time(elapsed);
    print_step_time(elapsed);

    // Step 4: Save
    print_step_header(4, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if let Some(pairs_path) = &cli.pairs_output {
        let mut pairs_df = pairs_to_dataframe(&result.pairs)?;
        save_dataset(&mut pairs_df, pairs_path)?;
        print_success(&format!("Mixed pairs saved to {}", pairs_path.display()));
    }

    if cli.no_export {
        print_info("Skipping occupancy export");
    } else if let Some(occupancy_path) = cli.occupancy_path() {
        let input_file = input.display().to_string();
        let config_file = config_path.display().to_string();
        let params = ExportParams {
            input_file: &input_file,
            config_file: &config_file,
            mixing_depth,
        };
        match export_occupancy(&categorizer, &result, &occupancy_path, &params) {
            Ok(()) => print_success(&format!(
                "Occupancy report saved to {}",
                occupancy_path.display()
            )),
            Err(e) => print_warning(&format!("Failed to write occupancy report: {:#}", e)),
        }
    }
    let elapsed = step_start.elapsed();
    summary.set_save_time(elapsed);
    print_step_time(elapsed);

    summary.display();
    print_completion();

    Ok(())
}
