// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for a11y-heuristics
//!
//! Configuration is an optional TOML file; every field has a default, and a
//! missing file means "all defaults".
//!
//! ```toml
//! checks = ["alt-text", "heading-structure"]
//! extensions = ["html", "vue"]
//! skip_dirs = ["node_modules", "dist"]
//! follow_links = false
//! ```

use crate::checks::Check;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Checks to run
    #[serde(default = "default_checks")]
    pub checks: Vec<Check>,

    /// File extensions to scan
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            checks: default_checks(),
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
            follow_links: false,
        }
    }
}

impl Config {
    /// Whether a check is enabled
    pub fn is_enabled(&self, check: Check) -> bool {
        self.checks.contains(&check)
    }

    /// Whether files with this extension are scanned
    pub fn scans_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    /// Whether a directory with this name is skipped
    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }

    /// Reject configurations that could never produce a finding
    pub fn validate(&self) -> Result<()> {
        if self.checks.is_empty() {
            return Err(Error::Config("no checks enabled".to_string()));
        }
        if self.extensions.is_empty() {
            return Err(Error::Config("no file extensions configured".to_string()));
        }
        if let Some(bad) = self.extensions.iter().find(|e| e.starts_with('.')) {
            return Err(Error::Config(format!(
                "extension \"{}\" must be given without a leading dot",
                bad
            )));
        }
        Ok(())
    }
}

fn default_checks() -> Vec<Check> {
    Check::ALL.to_vec()
}

fn default_extensions() -> Vec<String> {
    ["html", "htm", "jsx", "tsx", "svelte", "vue"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_skip_dirs() -> Vec<String> {
    ["node_modules", ".git", "target", "dist", "build", "vendor", "coverage"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file, falling back to defaults when absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config path, relative to the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".a11y-heuristics.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(path, content)?;
    Ok(())
}
