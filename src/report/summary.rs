//! Summary reporter - statistics and overview only

use crate::catalog::{Axis, Category, SmellEntry};
use crate::report::colors::{AxisIndicator, BoxChars, ChartChars, StructureColors};
use colored::Colorize;

/// Summary-only reporter with per-axis and per-category counts
pub struct SummaryReporter {
    /// Width of bar charts
    bar_width: usize,
}

impl SummaryReporter {
    pub fn new() -> Self {
        Self { bar_width: 20 }
    }

    pub fn report(&self, entries: &[&SmellEntry]) {
        println!();
        println!("{}", "Mobile Smell Catalog Summary".cyan().bold());
        println!("{}", BoxChars::heavy_line(50));
        println!();

        if entries.is_empty() {
            println!("{}", "No smells cataloged for this selection yet.".yellow());
            return;
        }

        let stats = CatalogStats::from_entries(entries);

        println!(
            "{:>16}  {}",
            "Smells:".dimmed(),
            StructureColors::count(&stats.total.to_string())
        );
        println!(
            "{:>16}  {}",
            "Categories:".dimmed(),
            StructureColors::count(&stats.by_category.len().to_string())
        );
        println!();

        self.print_axis_breakdown(&stats);
        println!();
        self.print_category_breakdown(&stats);
        println!();

        println!("{}", BoxChars::light_line(50).dimmed());
        println!("{}", "Run without --format summary for descriptions".dimmed());
        println!("{}", "Use --format json to feed an external rule engine".dimmed());
    }

    fn print_axis_breakdown(&self, stats: &CatalogStats) {
        println!("{}", "By Axis:".white().bold());
        let total = stats.total as f64;

        for (axis, count) in &stats.by_axis {
            let pct = (*count as f64 / total) * 100.0;
            println!(
                "  {} {:<13} {:>4} ({:>5.1}%)",
                AxisIndicator::for_axis(axis),
                AxisIndicator::label(axis),
                count,
                pct
            );
        }
    }

    fn print_category_breakdown(&self, stats: &CatalogStats) {
        println!("{}", "By Category:".white().bold());
        let total = stats.total as f64;

        let max_name_len = stats
            .by_category
            .iter()
            .map(|(c, _)| c.as_str().len())
            .max()
            .unwrap_or(10);

        for (category, count) in &stats.by_category {
            let pct = (*count as f64 / total) * 100.0;
            let bar = ChartChars::bar(pct, self.bar_width);
            let colored_bar = match category.axis() {
                Axis::Environmental => bar.green(),
                Axis::Social => bar.blue(),
            };
            println!(
                "  {:width$} │{}│ {:>4} ({:>5.1}%)",
                category.as_str(),
                colored_bar,
                count,
                pct,
                width = max_name_len
            );
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts derived from a list of entries, in first-seen order.
struct CatalogStats {
    total: usize,
    by_axis: Vec<(Axis, usize)>,
    by_category: Vec<(Category, usize)>,
}

impl CatalogStats {
    fn from_entries(entries: &[&SmellEntry]) -> Self {
        let mut by_axis: Vec<(Axis, usize)> = Vec::new();
        let mut by_category: Vec<(Category, usize)> = Vec::new();

        for entry in entries {
            let axis = entry.category.axis();
            match by_axis.iter_mut().find(|(a, _)| *a == axis) {
                Some((_, count)) => *count += 1,
                None => by_axis.push((axis, 1)),
            }
            match by_category.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, count)) => *count += 1,
                None => by_category.push((entry.category, 1)),
            }
        }

        Self {
            total: entries.len(),
            by_axis,
            by_category,
        }
    }
}
