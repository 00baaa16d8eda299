mod colors;
mod compact;
mod json;
mod summary;
mod terminal;

pub use compact::CompactReporter;
pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use terminal::TerminalReporter;

use crate::catalog::SmellEntry;
use miette::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Output format for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Default terminal output, grouped by category
    #[default]
    Terminal,
    /// Compact one-line-per-entry format
    Compact,
    /// JSON export for external rule engines
    Json,
    /// Summary statistics only
    Summary,
}

/// Options for report generation
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Output file path (JSON format only)
    pub output_path: Option<PathBuf>,
    /// Show the environmental/social axis next to each category
    pub show_axis: bool,
}

impl ReportOptions {
    pub fn new() -> Self {
        Self {
            output_path: None,
            show_axis: true,
        }
    }
}

/// Reporter dispatching catalog entries to the selected format.
pub struct Reporter {
    format: ReportFormat,
    options: ReportOptions,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            options: ReportOptions::new(),
        }
    }

    pub fn with_options(format: ReportFormat, options: ReportOptions) -> Self {
        Self { format, options }
    }

    /// Report the given entries. Entries are already in document order.
    pub fn report(&self, entries: &[&SmellEntry]) -> Result<()> {
        match self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new().with_axis(self.options.show_axis);
                reporter.report(entries);
                Ok(())
            }
            ReportFormat::Compact => {
                let reporter = CompactReporter::new();
                reporter.report(entries);
                Ok(())
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.options.output_path.clone());
                reporter.report(entries)
            }
            ReportFormat::Summary => {
                let reporter = SummaryReporter::new();
                reporter.report(entries);
                Ok(())
            }
        }
    }
}
