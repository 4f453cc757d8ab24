//! Runtime context for CLI commands

use anyhow::{Context, Result};
use rel_core::config::ResolvedConfig;
use rel_core::{Config, ReleaseVersion};
use rel_meta::MetaDb;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Runtime context containing resolved settings and the metadata store
pub(crate) struct RuntimeContext {
    /// Config after target and command-line overrides
    pub settings: ResolvedConfig,

    /// Open metadata store
    pub db: MetaDb,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = load_config(args)?;
        let settings = resolve_settings(&config, args)?;

        let db = MetaDb::from_config(&settings.metadata).with_context(|| {
            format!("Failed to open metadata store at {}", settings.metadata.path)
        })?;

        Ok(Self { settings, db })
    }

    /// The release version to use, preferring a command-line override.
    pub fn release_version<'a>(&'a self, cli: Option<&'a ReleaseVersion>) -> &'a ReleaseVersion {
        cli.unwrap_or(&self.settings.release_version)
    }
}

/// Load config from a custom path or the config directory
pub(crate) fn load_config(args: &GlobalArgs) -> Result<Config> {
    match &args.config {
        Some(config_path) => {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")
        }
        None => Config::load_from_dir(Path::new(&args.config_dir))
            .context("Failed to load release metadata configuration"),
    }
}

/// Apply the target, then any `--metadata` / `--inventory-table` overrides.
pub(crate) fn resolve_settings(config: &Config, args: &GlobalArgs) -> Result<ResolvedConfig> {
    let target = Config::resolve_target(args.target.as_deref());
    let mut settings = config
        .resolve(target.as_deref())
        .context("Failed to resolve target")?;

    if let Some(path) = &args.metadata {
        settings.metadata.path = path.clone();
    }
    if let Some(table) = &args.inventory_table {
        settings.inventory_table = table.clone();
    }
    log::debug!(
        "Using metadata store {} with inventory table {} (release {})",
        settings.metadata.path,
        settings.inventory_table,
        settings.release_version
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
