//! Catalog data model and read-only store.
//!
//! The catalog is loaded once from the markdown document and never mutated
//! afterwards. `CatalogStore` owns the entries in document order; every query
//! is a read over that slice, so the store is `Send + Sync` for free.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::parser::{self, CatalogError};

/// The catalog document shipped with the binary.
///
/// Used when no `--catalog` path is given so the CLI works out of the box.
pub const EMBEDDED_DOCUMENT: &str = include_str!("../../data/catalog.md");

/// Mobile operating system a smell applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Display name matching the document headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Android" => Ok(Platform::Android),
            "iOS" => Ok(Platform::Ios),
            _ => Err(()),
        }
    }
}

/// Coarse grouping of categories: energy footprint vs. people impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Environmental,
    Social,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Environmental => "Environmental",
            Axis::Social => "Social",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Environmental" => Ok(Axis::Environmental),
            "Social" => Ok(Axis::Social),
            _ => Err(()),
        }
    }
}

/// Thematic grouping of smells, one `####` section of the document each.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OptimizedApi,
    Leakage,
    Bottleneck,
    Sobriety,
    Idleness,
    Power,
    Batch,
    Release,
    Privacy,
    Gdpr,
    Inclusion,
}

impl Category {
    /// Heading text as it appears in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OptimizedApi => "Optimized API",
            Category::Leakage => "Leakage",
            Category::Bottleneck => "Bottleneck",
            Category::Sobriety => "Sobriety",
            Category::Idleness => "Idleness",
            Category::Power => "Power",
            Category::Batch => "Batch",
            Category::Release => "Release",
            Category::Privacy => "Privacy",
            Category::Gdpr => "GDPR",
            Category::Inclusion => "Inclusion",
        }
    }

    /// Which axis this category belongs to. Total: every category has one.
    pub fn axis(&self) -> Axis {
        match self {
            Category::OptimizedApi
            | Category::Leakage
            | Category::Bottleneck
            | Category::Sobriety
            | Category::Idleness
            | Category::Power
            | Category::Batch
            | Category::Release => Axis::Environmental,
            Category::Privacy | Category::Gdpr | Category::Inclusion => Axis::Social,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Optimized API" => Ok(Category::OptimizedApi),
            "Leakage" => Ok(Category::Leakage),
            "Bottleneck" => Ok(Category::Bottleneck),
            "Sobriety" => Ok(Category::Sobriety),
            "Idleness" => Ok(Category::Idleness),
            "Power" => Ok(Category::Power),
            "Batch" => Ok(Category::Batch),
            "Release" => Ok(Category::Release),
            "Privacy" => Ok(Category::Privacy),
            "GDPR" => Ok(Category::Gdpr),
            "Inclusion" => Ok(Category::Inclusion),
            _ => Err(()),
        }
    }
}

/// One documented code smell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmellEntry {
    pub platform: Platform,
    pub category: Category,
    /// Stable identifier, unique within (platform, category). Case-sensitive.
    pub name: String,
    /// Free text. May mention platform API symbols as plain text.
    pub description: String,
}

/// Read-only access to the smell catalog, in document order.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<SmellEntry>,
}

impl CatalogStore {
    pub(crate) fn new(entries: Vec<SmellEntry>) -> Self {
        Self { entries }
    }

    /// Parse and validate a catalog document.
    pub fn from_document(text: &str) -> Result<Self, CatalogError> {
        parser::parse_document(text).map(Self::new)
    }

    /// Load a catalog document from disk.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_document(&text)
    }

    /// Load the catalog shipped with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_document(EMBEDDED_DOCUMENT)
    }

    /// Full ordered sequence of entries.
    pub fn all(&self) -> &[SmellEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one platform, in document order. Empty if the platform
    /// section has no tables yet (iOS currently).
    pub fn list_by_platform(&self, platform: Platform) -> Vec<&SmellEntry> {
        self.entries
            .iter()
            .filter(|e| e.platform == platform)
            .collect()
    }

    /// Entries within one category of a platform, in document order.
    pub fn list_by_category(&self, platform: Platform, category: Category) -> Vec<&SmellEntry> {
        self.entries
            .iter()
            .filter(|e| e.platform == platform && e.category == category)
            .collect()
    }

    /// Exact, case-sensitive lookup. Absence is `None`, never a fault.
    pub fn find_by_name(&self, platform: Platform, name: &str) -> Option<&SmellEntry> {
        self.entries
            .iter()
            .find(|e| e.platform == platform && e.name == name)
    }

    /// Distinct categories present for a platform, in document order.
    pub fn categories(&self, platform: Platform) -> Vec<Category> {
        let mut seen = Vec::new();
        for entry in self.entries.iter().filter(|e| e.platform == platform) {
            if !seen.contains(&entry.category) {
                seen.push(entry.category);
            }
        }
        seen
    }
}
