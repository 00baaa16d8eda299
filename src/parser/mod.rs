//! Markdown catalog parser.
//!
//! The document layout is fixed: `##` headings open a platform section,
//! `### <Axis> smells` headings announce the axis, `####` headings open a
//! category, and entries are rows of a two-column `| Name | Description |`
//! table. Anything that does not fit is a fatal load error; there is no
//! partial load.

use miette::Diagnostic;
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

use crate::catalog::{Axis, Category, Platform, SmellEntry};

/// Fatal catalog load errors. Reported before any query can run.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("cannot read catalog document '{}'", path.display())]
    #[diagnostic(code(smellcatalog::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown platform heading '{name}'")]
    #[diagnostic(
        code(smellcatalog::load::platform),
        help("platform sections must be '## Android' or '## iOS'")
    )]
    UnknownPlatform { line: usize, name: String },

    #[error("line {line}: unknown smell axis '{name}'")]
    #[diagnostic(
        code(smellcatalog::load::axis),
        help("axis headings must be '### Environmental smells' or '### Social smells'")
    )]
    UnknownAxis { line: usize, name: String },

    #[error("line {line}: unknown category heading '{name}'")]
    #[diagnostic(code(smellcatalog::load::category))]
    UnknownCategory { line: usize, name: String },

    #[error("line {line}: category '{category}' listed under {axis} smells")]
    #[diagnostic(code(smellcatalog::load::axis_mismatch))]
    AxisMismatch {
        line: usize,
        category: Category,
        axis: Axis,
    },

    #[error("line {line}: table row outside a platform/category section")]
    #[diagnostic(code(smellcatalog::load::stray_row))]
    RowOutsideSection { line: usize },

    #[error("line {line}: expected a two-column row (name, description)")]
    #[diagnostic(code(smellcatalog::load::malformed_row))]
    MalformedRow { line: usize },

    #[error("line {line}: entry '{name}' duplicated in {platform}/{category}")]
    #[diagnostic(code(smellcatalog::load::duplicate))]
    DuplicateName {
        line: usize,
        platform: Platform,
        category: Category,
        name: String,
    },
}

/// Parse a catalog document into its ordered entries.
///
/// Deterministic: the same text always yields the same entry sequence.
pub fn parse_document(text: &str) -> Result<Vec<SmellEntry>, CatalogError> {
    let mut entries: Vec<SmellEntry> = Vec::new();
    let mut seen: HashSet<(Platform, Category, String)> = HashSet::new();

    let mut platform: Option<Platform> = None;
    let mut axis: Option<Axis> = None;
    let mut category: Option<Category> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if !trimmed.starts_with("###") {
            if let Some(name) = trimmed.strip_prefix("## ") {
                let name = name.trim();
                platform =
                    Some(
                        Platform::from_str(name).map_err(|_| CatalogError::UnknownPlatform {
                            line,
                            name: name.to_string(),
                        })?,
                    );
                axis = None;
                category = None;
                debug!("entering platform section '{}'", name);
                continue;
            }
        }

        if let Some(name) = trimmed.strip_prefix("#### ") {
            let name = name.trim();
            let parsed = Category::from_str(name).map_err(|_| CatalogError::UnknownCategory {
                line,
                name: name.to_string(),
            })?;
            if let Some(axis) = axis {
                if parsed.axis() != axis {
                    return Err(CatalogError::AxisMismatch {
                        line,
                        category: parsed,
                        axis,
                    });
                }
            }
            category = Some(parsed);
            continue;
        }

        if let Some(heading) = trimmed.strip_prefix("### ") {
            // Only '<Axis> smells' headings are structural at this level.
            if let Some(name) = heading.trim().strip_suffix(" smells") {
                axis = Some(Axis::from_str(name).map_err(|_| CatalogError::UnknownAxis {
                    line,
                    name: name.to_string(),
                })?);
                category = None;
            }
            continue;
        }

        if trimmed.starts_with('|') {
            let Some(cells) = split_row(trimmed) else {
                return Err(CatalogError::MalformedRow { line });
            };
            if is_header_row(&cells) || is_separator_row(&cells) {
                continue;
            }
            let (Some(platform), Some(category)) = (platform, category) else {
                return Err(CatalogError::RowOutsideSection { line });
            };
            if cells.len() != 2 || cells[0].is_empty() || cells[1].is_empty() {
                return Err(CatalogError::MalformedRow { line });
            }
            let name = cells[0].to_string();
            if !seen.insert((platform, category, name.clone())) {
                return Err(CatalogError::DuplicateName {
                    line,
                    platform,
                    category,
                    name,
                });
            }
            entries.push(SmellEntry {
                platform,
                category,
                name,
                description: cells[1].to_string(),
            });
        }
    }

    debug!("parsed {} catalog entries", entries.len());
    Ok(entries)
}

/// Split `| a | b |` into trimmed cells. `None` if the row is not closed.
fn split_row(row: &str) -> Option<Vec<&str>> {
    let inner = row.strip_prefix('|')?.strip_suffix('|')?;
    Some(inner.split('|').map(str::trim).collect())
}

fn is_header_row(cells: &[&str]) -> bool {
    cells
        .first()
        .is_some_and(|c| c.eq_ignore_ascii_case("name"))
}

fn is_separator_row(cells: &[&str]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}
