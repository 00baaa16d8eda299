//! JSON export for external rule engines.
//!
//! The record shape is flat on purpose: one object per smell with
//! `platform`, `axis`, `category`, `name` and `description`, so a consumer
//! can map records onto its own rule format without walking a tree.

use crate::catalog::{Axis, Category, Platform, SmellEntry};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use std::path::PathBuf;

/// Flat export record, one per catalog entry.
#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    pub platform: Platform,
    pub axis: Axis,
    pub category: Category,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a SmellEntry> for ExportRecord<'a> {
    fn from(entry: &'a SmellEntry) -> Self {
        Self {
            platform: entry.platform,
            axis: entry.category.axis(),
            category: entry.category,
            name: &entry.name,
            description: &entry.description,
        }
    }
}

/// JSON reporter writing to stdout or a file
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, entries: &[&SmellEntry]) -> Result<()> {
        let records: Vec<ExportRecord> = entries.iter().map(|e| ExportRecord::from(*e)).collect();
        let json = serde_json::to_string_pretty(&records).into_diagnostic()?;

        match &self.output_path {
            Some(path) => {
                std::fs::write(path, json)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("failed to write report to {}", path.display()))?;
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}
