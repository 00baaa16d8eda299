//! Compact reporter - one line per catalog entry.

use crate::catalog::SmellEntry;
use colored::Colorize;

/// One-line-per-entry reporter for grep-friendly output
pub struct CompactReporter;

impl CompactReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, entries: &[&SmellEntry]) {
        for entry in entries {
            println!("{}", Self::format_line(entry));
        }
    }

    /// `android/leakage  Media Leak  <description>`
    pub fn format_line(entry: &SmellEntry) -> String {
        let scope = format!(
            "{}/{}",
            entry.platform.as_str().to_lowercase(),
            entry.category.as_str().to_lowercase().replace(' ', "-")
        );
        format!(
            "{:<24} {:<28} {}",
            scope.dimmed(),
            entry.name.bold(),
            entry.description
        )
    }
}

impl Default for CompactReporter {
    fn default() -> Self {
        Self::new()
    }
}
