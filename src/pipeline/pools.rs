//! Event pooling by category and mixed-pair generation

use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::mixing::EventPools;

/// Default number of events kept per category pool
pub const DEFAULT_MIXING_DEPTH: usize = 5;

/// Two rows from different events sharing a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedPair {
    pub category: usize,
    /// Row of the earlier (pooled) event
    pub first: usize,
    /// Row of the event being mixed in
    pub second: usize,
}

/// Occupancy of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOccupancy {
    pub category: usize,
    pub events: usize,
    pub mixed_pairs: usize,
}

/// Outcome of pooling a whole table
#[derive(Debug, Clone, Default)]
pub struct PoolingResult {
    pub rows: usize,
    pub categorized: usize,
    pub rejected: usize,
    /// Per-category counts, ascending by category
    pub occupancy: Vec<CategoryOccupancy>,
    pub pairs: Vec<MixedPair>,
}

impl PoolingResult {
    pub fn occupied_categories(&self) -> usize {
        self.occupancy.len()
    }
}

/// Stream rows through depth-bounded pools, in row order
///
/// Rows without a category are skipped. Each categorized row is paired with
/// every row currently held in its category's pool.
pub fn mix_events(categories: &[Option<usize>], depth: usize) -> Result<PoolingResult> {
    let mut pools = EventPools::new(depth).context("Invalid mixing depth")?;
    let mut counts: BTreeMap<usize, CategoryOccupancy> = BTreeMap::new();
    let mut pairs = Vec::new();
    let mut rejected = 0usize;

    for (row, category) in categories.iter().enumerate() {
        let Some(category) = *category else {
            rejected += 1;
            continue;
        };

        let partners = pools.insert(category, row);
        let entry = counts.entry(category).or_insert(CategoryOccupancy {
            category,
            events: 0,
            mixed_pairs: 0,
        });
        entry.events += 1;
        entry.mixed_pairs += partners.len();

        pairs.extend(partners.into_iter().map(|first| MixedPair {
            category,
            first,
            second: row,
        }));
    }

    Ok(PoolingResult {
        rows: categories.len(),
        categorized: categories.len() - rejected,
        rejected,
        occupancy: counts.into_values().collect(),
        pairs,
    })
}

/// Mixed pairs as a three-column frame (`category`, `first_row`, `second_row`)
pub fn pairs_to_dataframe(pairs: &[MixedPair]) -> Result<DataFrame> {
    let category: Vec<u64> = pairs.iter().map(|p| p.category as u64).collect();
    let first: Vec<u64> = pairs.iter().map(|p| p.first as u64).collect();
    let second: Vec<u64> = pairs.iter().map(|p| p.second as u64).collect();

    let df = DataFrame::new(vec![
        Column::new("category".into(), category),
        Column::new("first_row".into(), first),
        Column::new("second_row".into(), second),
    ])
    .context("Failed to build mixed pair table")?;
    Ok(df)
}
