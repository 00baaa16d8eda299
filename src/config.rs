//! Configuration for the catalog CLI.
//!
//! Loaded from a TOML file (`--config`, or `.smellcatalog.toml` /
//! `smellcatalog.toml` next to the working directory). CLI flags always win
//! over config values.

use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Platform;
use crate::report::ReportFormat;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file '{}'", path.display())]
    #[diagnostic(code(smellcatalog::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}'", path.display())]
    #[diagnostic(code(smellcatalog::config::parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User-level defaults for the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the catalog document. Defaults to the embedded catalog.
    pub catalog: Option<PathBuf>,
    /// Default platform when `--platform` is not given.
    pub platform: Option<Platform>,
    /// Default output format when `--format` is not given.
    pub format: Option<ReportFormat>,
}

const DEFAULT_FILE_NAMES: &[&str] = &[".smellcatalog.toml", "smellcatalog.toml"];

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Look for a config file in the default locations under `base`.
    /// Absence of a file is not an error; defaults apply.
    pub fn from_default_locations(base: &Path) -> Result<Self, ConfigError> {
        for name in DEFAULT_FILE_NAMES {
            let candidate = base.join(name);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }
}
