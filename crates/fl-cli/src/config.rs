//! Project configuration from framelint.toml or pyproject.toml

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// File checked in the project directory before falling back to
/// `pyproject.toml`
const CONFIG_FILE: &str = "framelint.toml";

/// Table consulted inside `pyproject.toml`
const PYPROJECT_TABLE: &str = "framelint";

/// Project configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Patterns excluded from file discovery
    pub exclude: Vec<String>,

    /// Do not recurse into directories
    pub non_recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: vec![".venv/".to_string()],
            non_recursive: false,
        }
    }
}

impl Config {
    /// Load configuration for a project directory.
    ///
    /// An explicit `override_path` wins. Otherwise `framelint.toml` in the
    /// project directory is tried, then the `[tool.framelint]` table of
    /// `pyproject.toml`. Missing files yield the defaults. Patterns from a
    /// config file extend the default exclusions rather than replacing
    /// them.
    pub fn load(project_dir: &Path, override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            return Self::from_toml(&text, path);
        }

        let standalone = project_dir.join(CONFIG_FILE);
        if standalone.is_file() {
            let text = std::fs::read_to_string(&standalone)
                .with_context(|| format!("Failed to read {}", standalone.display()))?;
            return Self::from_toml(&text, &standalone);
        }

        let pyproject = project_dir.join("pyproject.toml");
        if pyproject.is_file() {
            let text = std::fs::read_to_string(&pyproject)
                .with_context(|| format!("Failed to read {}", pyproject.display()))?;
            return Self::from_pyproject(&text, &pyproject);
        }

        Ok(Self::default())
    }

    /// Parse a standalone config file
    fn from_toml(text: &str, path: &Path) -> Result<Self> {
        let loaded: Config = toml::from_str(text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self::merge_defaults(loaded))
    }

    /// Parse the `[tool.framelint]` table of a pyproject file; an absent
    /// table yields the defaults
    fn from_pyproject(text: &str, path: &Path) -> Result<Self> {
        let value: toml::Value = toml::from_str(text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let Some(table) = value
            .get("tool")
            .and_then(|tool| tool.get(PYPROJECT_TABLE))
        else {
            return Ok(Self::default());
        };
        let loaded: Config = table
            .clone()
            .try_into()
            .with_context(|| format!("Invalid [tool.{PYPROJECT_TABLE}] in {}", path.display()))?;
        Ok(Self::merge_defaults(loaded))
    }

    /// Keep the default exclusions in front of configured ones
    fn merge_defaults(loaded: Config) -> Config {
        let mut merged = Config::default();
        for pattern in loaded.exclude {
            if !merged.exclude.contains(&pattern) {
                merged.exclude.push(pattern);
            }
        }
        merged.non_recursive = loaded.non_recursive;
        merged
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
