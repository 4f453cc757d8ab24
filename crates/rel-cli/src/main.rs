//! relmeta - release metadata lookups for the variant release pipeline

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod logging;

use cli::Cli;
use commands::{categories, lookup, plan};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.global.verbose)?;

    match &cli.command {
        cli::Commands::DbsnpAssemblies(args) => lookup::dbsnp_assemblies(args, &cli.global),
        cli::Commands::TargetInstance(args) => lookup::target_instance(args, &cli.global),
        cli::Commands::Assemblies(args) => lookup::assemblies(args, &cli.global),
        cli::Commands::Inventory(args) => lookup::inventory(args, &cli.global),
        cli::Commands::Plan(args) => plan::execute(args, &cli.global),
        cli::Commands::Categories => categories::execute(&cli.global),
    }
}
