//! Project configuration parsing and validation.
//!
//! Handles docsweep.toml parsing with version validation and unknown key
//! warnings. The config owns the lab list and the path handed to doc8 via
//! `--config`.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "docsweep.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    project: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Project configuration.
    #[serde(default)]
    pub project: ProjectConfig,
}

/// Project-level configuration.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Lab directory names, relative to the project root.
    #[serde(default)]
    pub labs: Vec<String>,

    /// Addon lab directory names, excluded from the default run.
    #[serde(default)]
    pub addon_labs: Vec<String>,

    /// Documentation subtree checked recursively (default: "docs").
    #[serde(default = "ProjectConfig::default_docs_dir")]
    pub docs_dir: String,

    /// File passed to doc8 via --config (default: "pyproject.toml").
    #[serde(default = "ProjectConfig::default_checker_config")]
    pub checker_config: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            labs: Vec::new(),
            addon_labs: Vec::new(),
            docs_dir: Self::default_docs_dir(),
            checker_config: Self::default_checker_config(),
        }
    }
}

impl ProjectConfig {
    fn default_docs_dir() -> String {
        "docs".to_string()
    }

    fn default_checker_config() -> String {
        "pyproject.toml".to_string()
    }

    /// Lab directory names in config order, optionally including addon labs.
    pub fn labs_paths(&self, include_addons: bool) -> Vec<&str> {
        let mut labs: Vec<&str> = self.labs.iter().map(String::as_str).collect();
        if include_addons {
            labs.extend(self.addon_labs.iter().map(String::as_str));
        }
        labs
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "project"];

/// Known project keys in the config.
const KNOWN_PROJECT_KEYS: &[&str] = &["labs", "addon_labs", "docs_dir", "checker_config"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
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
    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    // First validate version
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Collect unknown top-level keys
    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }

    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    // Return a valid config with known fields
    let project = match flexible.project {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_PROJECT_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("project.{}", key));
                }
            }

            let labs = string_list(t.get("labs"));
            let addon_labs = string_list(t.get("addon_labs"));

            let docs_dir = t
                .get("docs_dir")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(ProjectConfig::default_docs_dir);

            let checker_config = t
                .get("checker_config")
                .and_then(|v| v.as_str())
                .map(String::from)
                .unwrap_or_else(ProjectConfig::default_checker_config);

            ProjectConfig {
                labs,
                addon_labs,
                docs_dir,
                checker_config,
            }
        }
        _ => ProjectConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        project,
    })
}

fn string_list(value: Option<&toml::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "docsweep: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
