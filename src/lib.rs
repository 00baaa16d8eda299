//! smellcatalog - a queryable catalog of mobile-specific code smells
//!
//! This library loads the markdown catalog of energy-efficiency and privacy
//! code smells for mobile platforms and exposes read-only structured access
//! to it.
//!
//! # Architecture
//!
//! The pipeline is deliberately short:
//! 1. **Loading** - parse the markdown document (embedded or from disk)
//! 2. **Validation** - reject malformed rows, unknown sections, duplicates
//! 3. **Queries** - by platform, by category, by exact name, or all entries
//! 4. **Reporting** - terminal, compact, JSON export, or summary output
//!
//! The store is immutable after load, so it can be shared across threads
//! without locking.

pub mod catalog;
pub mod config;
pub mod parser;
pub mod report;

pub use catalog::{Axis, CatalogStore, Category, Platform, SmellEntry, EMBEDDED_DOCUMENT};
pub use config::{Config, ConfigError};
pub use parser::CatalogError;
pub use report::{ReportFormat, ReportOptions, Reporter};
