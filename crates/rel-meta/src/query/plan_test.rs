use super::*;
use crate::testing::{self, InventoryRow};
use crate::MetaDb;
use rel_core::ReleaseFileCategory;

fn table() -> InventoryTable {
    InventoryTable::parse("release_species_inventory").unwrap()
}

fn seeded() -> MetaDb {
    let db = testing::empty_store(&table()).unwrap();
    let conn = db.conn();
    testing::insert_release_assembly(conn, "5", "9606", "GRCh37", "dbSNP").unwrap();
    for assembly in ["GRCh38", "GRCh37"] {
        testing::insert_inventory_row(
            conn,
            &table(),
            &InventoryRow::new("9606", assembly, Some("mongo-3")),
        )
        .unwrap();
    }
    db
}

#[test]
fn plan_collects_every_assembly() {
    let db = seeded();
    let plan = release_plan(
        &db,
        &TaxonomyId::new("9606"),
        &ReleaseVersion::new("5"),
        &table(),
    )
    .unwrap();

    assert_eq!(plan.target_instance, "mongo-3");
    assert_eq!(plan.dbsnp_assemblies, vec!["GRCh37"]);

    let mut names: Vec<&str> = plan.assemblies.iter().map(|a| a.assembly.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["GRCh37", "GRCh38"]);

    let grch37 = plan
        .assemblies
        .iter()
        .find(|a| a.assembly == "GRCh37")
        .unwrap();
    assert!(grch37.from_dbsnp_import);
    assert_eq!(grch37.inventory.assembly().as_deref(), Some("GRCh37"));
    assert_eq!(grch37.release_files.len(), ReleaseFileCategory::ALL.len());
    assert!(grch37
        .release_files
        .contains(&"GRCh37_current_ids.vcf".to_string()));

    let grch38 = plan
        .assemblies
        .iter()
        .find(|a| a.assembly == "GRCh38")
        .unwrap();
    assert!(!grch38.from_dbsnp_import);
}

#[test]
fn plan_fails_when_taxonomy_absent() {
    let db = seeded();
    let err = release_plan(
        &db,
        &TaxonomyId::new("1234"),
        &ReleaseVersion::new("5"),
        &table(),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn plan_fails_on_duplicate_inventory_rows() {
    let db = seeded();
    testing::insert_inventory_row(
        db.conn(),
        &table(),
        &InventoryRow::new("9606", "GRCh38", Some("mongo-3")),
    )
    .unwrap();

    let err = release_plan(
        &db,
        &TaxonomyId::new("9606"),
        &ReleaseVersion::new("5"),
        &table(),
    )
    .unwrap_err();
    assert!(err.is_data_integrity());
}

#[test]
fn plan_serializes_to_json() {
    let db = seeded();
    let plan = release_plan(
        &db,
        &TaxonomyId::new("9606"),
        &ReleaseVersion::new("5"),
        &table(),
    )
    .unwrap();

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["taxonomy_id"], "9606");
    assert_eq!(value["inventory_table"], "release_species_inventory");
    assert_eq!(value["assemblies"].as_array().unwrap().len(), 2);
    assert_eq!(
        value["assemblies"][0]["inventory"]["tempmongo_instance"],
        "mongo-3"
    );
}
