// ABOUTME: Extraction run configuration loaded from a TOML file
// ABOUTME: Names the tables of interest and an optional default report path

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The table set extracted when neither the CLI nor a config file names
/// one. These are the domain tables of the legacy hosting panel this tool
/// was built to migrate away from.
pub const DEFAULT_TABLES: [&str; 5] = ["is_user", "is_admin", "is_account", "is_ticket", "is_ssl"];

/// Settings for one extraction run.
///
/// ```toml
/// tables = ["is_user", "is_admin"]
/// output = "report.json"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractorConfig {
    /// Tables to extract. Empty means "use the default set".
    #[serde(default)]
    pub tables: Vec<String>,
    /// Default path for the JSON report; `--output` overrides it.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Load an [`ExtractorConfig`] from a TOML file.
pub fn load_config(path: &Path) -> Result<ExtractorConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config: ExtractorConfig = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
    Ok(config)
}

/// The built-in default table set as owned strings.
pub fn default_tables() -> Vec<String> {
    DEFAULT_TABLES.iter().map(|name| name.to_string()).collect()
}
