use crate::error::{Result, ShowcaseError};
use crate::model::ViewKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for showcase, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// View opened when no command is given
    #[serde(default = "default_view")]
    pub default_view: ViewKind,

    /// Trim leading and trailing whitespace from search queries
    #[serde(default = "default_trim_query")]
    pub trim_query: bool,

    /// Directory holding `<view>.json` catalog overrides
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

fn default_view() -> ViewKind {
    ViewKind::Discover
}

fn default_trim_query() -> bool {
    true
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            trim_query: default_trim_query(),
            catalog_dir: None,
        }
    }
}

/// Keys understood by `showcase config`.
pub const CONFIG_KEYS: &[&str] = &["default-view", "trim-query", "catalog-dir"];

impl ShowcaseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShowcaseConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of a key, formatted for display
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-view" => Ok(self.default_view.to_string()),
            "trim-query" => Ok(self.trim_query.to_string()),
            "catalog-dir" => Ok(self
                .catalog_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from its string form. An empty `catalog-dir` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-view" => {
                let view: ViewKind = value.parse()?;
                if !view.is_catalog() {
                    return Err(ShowcaseError::Config(format!(
                        "default-view must be a catalog view, not {}",
                        view
                    )));
                }
                self.default_view = view;
            }
            "trim-query" => {
                self.trim_query = value.parse().map_err(|_| {
                    ShowcaseError::Config(format!("trim-query expects true or false, got {}", value))
                })?;
            }
            "catalog-dir" => {
                self.catalog_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ShowcaseError {
    ShowcaseError::Config(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
