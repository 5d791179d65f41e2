//! CLI settings loaded from `saldo.toml`, overridable by flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG: &str = "saldo.toml";

/// Settings the CLI falls back to when a flag is not given.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory holding the CSV exports.
    pub data_dir: PathBuf,
    /// Business (tenant) id the exports belong to.
    pub business: u64,
    /// Decimal digits per major currency unit in the export amounts.
    pub amount_scale: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            business: 1,
            amount_scale: 0,
        }
    }
}

impl CliConfig {
    /// Load from the given path, from `./saldo.toml` when present, or fall
    /// back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
            None => return Ok(Self::default()),
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
