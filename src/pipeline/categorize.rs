//! Per-row event categorization of an event table

use anyhow::{Context, Result};
use polars::prelude::*;
use rayon::prelude::*;

use crate::mixing::{Categorizer, Observables, UsedVariables};

/// Name of the column holding the assigned category
pub const CATEGORY_COLUMN: &str = "category";

/// Build one observable vector per row from the used observable columns.
///
/// Columns are cast to Float64; nulls become NaN and are therefore rejected
/// by every axis. Observables that are not in `used` stay unset.
pub fn extract_observables(df: &DataFrame, used: &UsedVariables) -> Result<Vec<Observables>> {
    let mut rows = vec![Observables::new(); df.height()];

    for variable in used.iter() {
        let column = df
            .column(variable.name())
            .with_context(|| format!("Observable column '{}' not found", variable.name()))?;
        let float_col = column.cast(&DataType::Float64).with_context(|| {
            format!(
                "Observable column '{}' must be numeric (cannot cast to Float64)",
                variable.name()
            )
        })?;
        let ca = float_col.f64()?;

        for (row, value) in rows.iter_mut().zip(ca.iter()) {
            row.set(variable, value.unwrap_or(f64::NAN));
        }
    }

    Ok(rows)
}

/// Categorize every row in parallel, preserving row order
pub fn categorize_rows(categorizer: &Categorizer, rows: &[Observables]) -> Vec<Option<usize>> {
    rows.par_iter()
        .map(|values| categorizer.categorize(values))
        .collect()
}

/// Add (or replace) the `category` column; rejected rows get null
pub fn add_category_column(df: &mut DataFrame, categories: &[Option<usize>]) -> Result<()> {
    if categories.len() != df.height() {
        anyhow::bail!(
            "Category count {} does not match row count {}",
            categories.len(),
            df.height()
        );
    }
    let values: Vec<Option<u64>> = categories
        .iter()
        .map(|c| c.map(|c| c as u64))
        .collect();
    let series = Series::new(CATEGORY_COLUMN.into(), values);
    df.with_column(series)
        .context("Failed to add category column")?;
    Ok(())
}

/// Extract observables, categorize and attach the category column in one go
pub fn categorize_dataframe(
    df: &mut DataFrame,
    categorizer: &Categorizer,
    used: &UsedVariables,
) -> Result<Vec<Option<usize>>> {
    let rows = extract_observables(df, used)?;
    let categories = categorize_rows(categorizer, &rows);
    add_category_column(df, &categories)?;
    Ok(categories)
}
