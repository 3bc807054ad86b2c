//! Categorization summary report

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::PoolingResult;

/// Summary of one categorization run
#[derive(Debug, Default)]
pub struct CategorizationSummary {
    pub rows: usize,
    pub categorized: usize,
    pub rejected: usize,
    pub occupied_categories: usize,
    pub total_categories: usize,
    pub mixed_pairs: usize,
    pub mixing_depth: usize,
    pub load_time: Option<Duration>,
    pub categorize_time: Option<Duration>,
    pub mixing_time: Option<Duration>,
    pub save_time: Option<Duration>,
}

impl CategorizationSummary {
    pub fn new(total_categories: usize, mixing_depth: usize) -> Self {
        Self {
            total_categories,
            mixing_depth,
            ..Default::default()
        }
    }

    pub fn add_pooling(&mut self, result: &PoolingResult) {
        self.rows = result.rows;
        self.categorized = result.categorized;
        self.rejected = result.rejected;
        self.occupied_categories = result.occupied_categories();
        self.mixed_pairs = result.pairs.len();
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = Some(elapsed);
    }

    pub fn set_categorize_time(&mut self, elapsed: Duration) {
        self.categorize_time = Some(elapsed);
    }

    pub fn set_mixing_time(&mut self, elapsed: Duration) {
        self.mixing_time = Some(elapsed);
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = Some(elapsed);
    }

    /// Share of rows that landed in a category, in percent
    pub fn acceptance_pct(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.categorized as f64 / self.rows as f64 * 100.0
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CATEGORIZATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Events Read"), Cell::new(self.rows)]);
        table.add_row(vec![
            Cell::new("✅ Categorized"),
            Cell::new(self.categorized).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("🗑️  Out of Range"),
            Cell::new(self.rejected).fg(if self.rejected == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        let acceptance = self.acceptance_pct();
        let color = if acceptance > 90.0 {
            Color::Green
        } else if acceptance > 50.0 {
            Color::Yellow
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new("📈 Acceptance"),
            Cell::new(format!("{:.1}%", acceptance))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🧮 Occupied Categories"),
            Cell::new(format!(
                "{} / {}",
                self.occupied_categories, self.total_categories
            )),
        ]);
        table.add_row(vec![
            Cell::new("🔀 Mixed Pairs"),
            Cell::new(self.mixed_pairs)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("📦 Pool Depth"),
            Cell::new(self.mixing_depth),
        ]);

        let timings = [
            ("⏱  Load", self.load_time),
            ("⏱  Categorize", self.categorize_time),
            ("⏱  Mixing", self.mixing_time),
            ("⏱  Save", self.save_time),
        ];
        for (label, elapsed) in timings {
            if let Some(elapsed) = elapsed {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new(format!("{:.2}s", elapsed.as_secs_f64())),
                ]);
            }
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::mix_events;

    #[test]
    fn test_add_pooling() {
        let result = mix_events(&[Some(0), None, Some(0), Some(1)], 3).unwrap();
        let mut summary = CategorizationSummary::new(4, 3);
        summary.add_pooling(&result);

        assert_eq!(summary.rows, 4);
        assert_eq!(summary.categorized, 3);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.occupied_categories, 2);
        assert_eq!(summary.mixed_pairs, 1);
        assert!((summary.acceptance_pct() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_acceptance_empty() {
        let summary = CategorizationSummary::new(0, 1);
        assert_eq!(summary.acceptance_pct(), 0.0);
    }
}
