//! Configuration types and parsing for release_metadata.yml

use crate::error::{CoreError, CoreResult};
use crate::identifiers::ReleaseVersion;
use crate::inventory_table::InventoryTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Environment variable consulted when no `--target` flag is given.
pub const TARGET_ENV_VAR: &str = "RELMETA_TARGET";

/// Config file names searched for by [`Config::load_from_dir`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["release_metadata.yml", "release_metadata.yaml"];

/// Release metadata configuration from release_metadata.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Release cycle whose dbSNP assembly-import records are consulted
    pub release_version: ReleaseVersion,

    /// Metadata store connection settings
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Species inventory table for this release
    pub inventory_table: InventoryTable,

    /// Named target configurations (e.g., staging, prod)
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

/// Target-specific configuration overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Metadata store override
    #[serde(default)]
    pub metadata: Option<MetadataConfig>,

    /// Inventory table override
    #[serde(default)]
    pub inventory_table: Option<InventoryTable>,

    /// Release version override
    #[serde(default)]
    pub release_version: Option<ReleaseVersion>,
}

/// Metadata store connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfig {
    /// DuckDB database path (or `:memory:`)
    #[serde(default = "default_metadata_path")]
    pub path: String,

    /// Open the store read-only. Lookups never write.
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            path: default_metadata_path(),
            read_only: default_read_only(),
        }
    }
}

const DEFAULT_METADATA_PATH: &str = "metadata.duckdb";

fn default_metadata_path() -> String {
    DEFAULT_METADATA_PATH.to_string()
}

fn default_read_only() -> bool {
    true
}

/// Settings after applying a target's overrides to the base config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub release_version: ReleaseVersion,
    pub metadata: MetadataConfig,
    pub inventory_table: InventoryTable,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded release metadata config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for release_metadata.yml or release_metadata.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map_or_else(
                || {
                    Err(CoreError::ConfigNotFound {
                        path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                    })
                },
                |path| Self::load(&path),
            )
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        let target_metadata = self.targets.values().filter_map(|t| t.metadata.as_ref());
        for metadata in std::iter::once(&self.metadata).chain(target_metadata) {
            if metadata.path.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "metadata.path cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Names of all configured targets, sorted
    pub fn available_targets(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Apply a target's overrides, falling back to the base config for
    /// anything the target does not set.
    pub fn resolve(&self, target: Option<&str>) -> CoreResult<ResolvedConfig> {
        let Some(name) = target else {
            return Ok(ResolvedConfig {
                release_version: self.release_version.clone(),
                metadata: self.metadata.clone(),
                inventory_table: self.inventory_table.clone(),
            });
        };

        let target_config = self
            .targets
            .get(name)
            .ok_or_else(|| CoreError::ConfigInvalid {
                message: format!(
                    "Target '{}' not found. Available targets: {}",
                    name,
                    self.available_targets().join(", ")
                ),
            })?;

        Ok(ResolvedConfig {
            release_version: target_config
                .release_version
                .clone()
                .unwrap_or_else(|| self.release_version.clone()),
            metadata: target_config
                .metadata
                .clone()
                .unwrap_or_else(|| self.metadata.clone()),
            inventory_table: target_config
                .inventory_table
                .clone()
                .unwrap_or_else(|| self.inventory_table.clone()),
        })
    }

    /// Resolve target from CLI flag or RELMETA_TARGET environment variable
    ///
    /// Priority: CLI flag > RELMETA_TARGET env var > None
    pub fn resolve_target(cli_target: Option<&str>) -> Option<String> {
        cli_target
            .map(String::from)
            .or_else(|| std::env::var(TARGET_ENV_VAR).ok())
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
