use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn parses_inventory_with_globals() {
    let cli = Cli::try_parse_from([
        "relmeta",
        "--json",
        "-i",
        "eva_progress_tracker.release_species_inventory",
        "inventory",
        "9606",
        "GCA_000001405.15",
    ])
    .unwrap();

    assert!(cli.global.json);
    assert_eq!(
        cli.global.inventory_table.unwrap().as_str(),
        "eva_progress_tracker.release_species_inventory"
    );
    match cli.command {
        Commands::Inventory(args) => {
            assert_eq!(args.taxonomy, "9606");
            assert_eq!(args.assembly, "GCA_000001405.15");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_release_override() {
    let cli = Cli::try_parse_from(["relmeta", "dbsnp-assemblies", "9606", "-r", "6"]).unwrap();
    match cli.command {
        Commands::DbsnpAssemblies(args) => {
            assert_eq!(args.release.unwrap(), "6");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_invalid_inventory_table() {
    let result = Cli::try_parse_from([
        "relmeta",
        "--inventory-table",
        "inv;drop",
        "assemblies",
        "9606",
    ]);
    assert!(result.is_err());
}

#[test]
fn rejects_blank_taxonomy() {
    let result = Cli::try_parse_from(["relmeta", "target-instance", ""]);
    assert!(result.is_err());
}
