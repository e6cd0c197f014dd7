use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_LABEL_SEPARATOR;
use crate::error::{CatalogError, Result};
use crate::validate::IntegrityPolicy;

/// Config file name inside the base directory
pub const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# patchbook configuration file
# Location: ~/.patchbook/config.toml

[catalog]
# What to do when examples reference unknown categories, share an id,
# or point at a missing main file.
# "lenient": log a warning and keep going (default)
# "strict":  refuse to build the catalog
policy = "lenient"

# Extra example sources merged after the local examples (TOML or JSON)
# Relative paths are resolved against this directory.
# Example: sources = ["playground.toml", "community.json"]
sources = []

[display]
# Separator between category and subcategory titles
separator = " / "
"#;

/// Global configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Catalog assembly configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub policy: IntegrityPolicy,

    /// Extra source files, in merge order
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_LABEL_SEPARATOR.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::ConfigParse {
            message: e.to_string(),
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::ConfigParse {
            message: e.to_string(),
        })
    }

    pub fn policy(&self) -> IntegrityPolicy {
        self.catalog.policy
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog.policy" => Some(self.catalog.policy.to_string()),
            "catalog.sources" => Some(format!("{:?}", self.catalog.sources)),
            "display.separator" => Some(format!("{:?}", self.display.separator)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog.policy" => {
                self.catalog.policy =
                    IntegrityPolicy::parse(value).ok_or_else(|| CatalogError::InvalidConfigValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                Ok(())
            }
            "catalog.sources" => {
                self.catalog.sources = parse_string_list(value);
                Ok(())
            }
            "display.separator" => {
                self.display.separator = value.to_string();
                Ok(())
            }
            _ => Err(CatalogError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["catalog.policy", "catalog.sources", "display.separator"]
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// Parse a JSON array or a comma-separated list string
///
/// A valid JSON string array keeps commas inside quoted entries. Anything
/// else (including `[a, b]` without quotes) is split on every comma.
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
        return items.into_iter().filter(|s| !s.is_empty()).collect();
    }

    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
