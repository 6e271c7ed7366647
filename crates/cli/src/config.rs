//! Suite configuration parsing and discovery.
//!
//! Handles lintsuite.toml parsing with version validation. The config file
//! is the category table: it names the fixture root, the external lint
//! engine, and every category with its thresholds.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "lintsuite.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full suite configuration, immutable after startup.
#[derive(Debug, Deserialize)]
pub struct SuiteConfig {
    /// Config file version (must be 1).
    pub version: i64,

    /// Fixture discovery configuration.
    #[serde(default)]
    pub fixtures: FixtureConfig,

    /// External lint engine configuration.
    pub engine: EngineConfig,

    /// Category table.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryConfig>,
}

/// Fixture discovery configuration.
#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    /// Root directory to walk, relative to the config file.
    #[serde(default = "FixtureConfig::default_root")]
    pub root: PathBuf,

    /// File extensions collected during discovery.
    #[serde(default = "FixtureConfig::default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            extensions: Self::default_extensions(),
        }
    }
}

impl FixtureConfig {
    fn default_root() -> PathBuf {
        PathBuf::from("tests/fixtures")
    }

    fn default_extensions() -> Vec<String> {
        ["js", "jsx", "vue", "html"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// External lint engine invocation.
#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Command to run, once per fixture file.
    pub command: String,

    /// Arguments passed before the engine config and file path.
    #[serde(default)]
    pub args: Vec<String>,

    /// Static engine configuration file, relative to the config file.
    /// Passed to the engine as `--config <path>` when present.
    pub config: Option<PathBuf>,
}

/// One category entry from the table.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Category identifier.
    pub name: String,

    /// Human description for report output.
    #[serde(default)]
    pub description: String,

    /// Fixture files, relative to the fixture root.
    pub files: Vec<PathBuf>,

    /// Maximum error count the category may accumulate while passing.
    #[serde(default)]
    pub max_errors: usize,

    /// Maximum warning count the category may accumulate while passing.
    #[serde(default)]
    pub max_warnings: usize,

    /// Rule ids expected to appear somewhere in the category.
    /// Advisory only: a missing rule is reported but never fails the category.
    #[serde(default)]
    pub expected_rules: Vec<String>,
}

/// Find lintsuite.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "LINTSUITE_CONFIG")
/// 2. Discovery from current directory up to git root
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<SuiteConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<SuiteConfig> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Parse full config
    let config: SuiteConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    validate(&config, path)?;
    Ok(config)
}

/// Structural validation beyond what serde enforces.
fn validate(config: &SuiteConfig, path: &Path) -> Result<()> {
    if config.engine.command.is_empty() {
        return Err(Error::Config {
            message: "engine.command must not be empty".to_string(),
            path: Some(path.to_path_buf()),
        });
    }

    let mut seen = std::collections::BTreeSet::new();
    for category in &config.categories {
        if category.name.is_empty() {
            return Err(Error::Config {
                message: "category name must not be empty".to_string(),
                path: Some(path.to_path_buf()),
            });
        }
        if !seen.insert(category.name.as_str()) {
            return Err(Error::Config {
                message: format!("duplicate category: {}", category.name),
                path: Some(path.to_path_buf()),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
