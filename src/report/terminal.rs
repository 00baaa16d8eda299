//! Terminal reporter with colored output, grouped by category.

use crate::catalog::{Category, SmellEntry};
use crate::report::colors::{AxisIndicator, StructureColors};
use colored::Colorize;

/// Terminal reporter with colored output
pub struct TerminalReporter {
    /// Show the axis label next to each category header
    show_axis: bool,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { show_axis: true }
    }

    pub fn with_axis(mut self, show: bool) -> Self {
        self.show_axis = show;
        self
    }

    pub fn report(&self, entries: &[&SmellEntry]) {
        if entries.is_empty() {
            println!("{}", "No smells cataloged for this selection yet.".yellow());
            return;
        }

        println!();
        println!(
            "Catalog: {} smells",
            StructureColors::count(&entries.len().to_string())
        );
        println!();

        // Group by category, preserving document order.
        let mut current: Option<Category> = None;
        for entry in entries {
            if current != Some(entry.category) {
                if current.is_some() {
                    println!();
                }
                self.print_category_header(entry);
                current = Some(entry.category);
            }
            self.print_entry(entry);
        }
        println!();
    }

    fn print_category_header(&self, entry: &SmellEntry) {
        let axis = entry.category.axis();
        if self.show_axis {
            println!(
                "{} {} {}",
                AxisIndicator::for_axis(&axis),
                StructureColors::category(entry.category.as_str()),
                format!("({} · {})", entry.platform, AxisIndicator::label(&axis)).dimmed()
            );
        } else {
            println!("{}", StructureColors::category(entry.category.as_str()));
        }
    }

    fn print_entry(&self, entry: &SmellEntry) {
        println!("  {} {}", "•".dimmed(), StructureColors::smell_name(&entry.name));
        println!("    {}", entry.description.dimmed());
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
