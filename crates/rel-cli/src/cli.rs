//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use rel_core::{AssemblyAccession, InventoryTable, ReleaseVersion, TaxonomyId};

/// relmeta - Look up release metadata for species, assemblies and target instances
#[derive(Parser, Debug)]
#[command(name = "relmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing release_metadata.yml
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub config_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Named target from the config (falls back to RELMETA_TARGET)
    #[arg(short, long, global = true)]
    pub target: Option<String>,

    /// Override the metadata store path
    #[arg(short, long, global = true)]
    pub metadata: Option<String>,

    /// Override the species inventory table
    #[arg(short = 'i', long, global = true)]
    pub inventory_table: Option<InventoryTable>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the dbSNP assemblies imported for a taxonomy in a release
    DbsnpAssemblies(ReleaseTaxonomyArgs),

    /// Show the document-store instance a taxonomy is released into
    TargetInstance(TaxonomyArgs),

    /// List the inventory assemblies of a taxonomy (sorted, duplicates kept)
    Assemblies(TaxonomyArgs),

    /// Show the inventory entry of a taxonomy and assembly
    Inventory(InventoryArgs),

    /// Show the full release plan of a taxonomy
    Plan(ReleaseTaxonomyArgs),

    /// List the release file categories
    Categories,
}

/// Arguments for commands keyed by taxonomy only
#[derive(Args, Debug)]
pub struct TaxonomyArgs {
    /// Taxonomy ID (e.g. 9606)
    pub taxonomy: TaxonomyId,
}

/// Arguments for commands keyed by taxonomy within a release
#[derive(Args, Debug)]
pub struct ReleaseTaxonomyArgs {
    /// Taxonomy ID (e.g. 9606)
    pub taxonomy: TaxonomyId,

    /// Override the configured release version
    #[arg(short, long)]
    pub release: Option<ReleaseVersion>,
}

/// Arguments for the inventory command
#[derive(Args, Debug)]
pub struct InventoryArgs {
    /// Taxonomy ID (e.g. 9606)
    pub taxonomy: TaxonomyId,

    /// Assembly accession (e.g. GCA_000001405.15)
    pub assembly: AssemblyAccession,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
