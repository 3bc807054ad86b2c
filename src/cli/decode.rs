//! `decode` and `variables` subcommands

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::mixing::{UsedVariables, Variable};
use crate::pipeline::MixingConfig;

/// Print the per-axis bins of `category` under the given configuration
pub fn run_decode(config_path: &Path, category: usize) -> Result<()> {
    let config = MixingConfig::from_path(config_path)?;
    let categorizer = config.to_categorizer(&mut UsedVariables::new())?;

    let bins = categorizer.decode(category).with_context(|| {
        format!(
            "Category {} is outside the valid range [0, {})",
            category,
            categorizer.total_categories()
        )
    })?;

    println!(
        "\n {} Category {} of {}",
        style("◆").cyan().bold(),
        style(category).yellow().bold(),
        categorizer.total_categories()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Axis").add_attribute(Attribute::Bold),
        Cell::new("Variable").add_attribute(Attribute::Bold),
        Cell::new("Bin").add_attribute(Attribute::Bold),
        Cell::new("Range").add_attribute(Attribute::Bold),
    ]);

    for (position, (axis, bin)) in categorizer.axes().iter().zip(bins).enumerate() {
        let range = axis
            .bin_bounds(bin)
            .map(|(lo, hi)| format!("[{}, {})", lo, hi))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(position),
            Cell::new(axis.variable()),
            Cell::new(format!("{} / {}", bin, axis.bin_count())),
            Cell::new(range),
        ]);
    }

    for line in table.to_string().lines() {
        println!("   {}", line);
    }
    println!();

    Ok(())
}

/// Print the known observables and their column names
pub fn run_variables() -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);
    for variable in Variable::ALL {
        table.add_row(vec![
            Cell::new(variable.name()),
            Cell::new(variable.description()),
        ]);
    }

    println!();
    for line in table.to_string().lines() {
        println!("   {}", line);
    }
    println!();

    Ok(())
}
