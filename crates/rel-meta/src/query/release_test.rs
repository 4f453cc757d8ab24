use super::*;
use crate::testing::{self, InventoryRow};
use crate::MetaDb;
use serde_json::json;

fn table() -> InventoryTable {
    InventoryTable::parse("release_species_inventory").unwrap()
}

fn tax(id: &str) -> TaxonomyId {
    TaxonomyId::new(id)
}

fn store() -> MetaDb {
    testing::empty_store(&table()).unwrap()
}

fn add_dbsnp(db: &MetaDb, release: &str, tax_id: &str, assembly: &str, source: &str) {
    testing::insert_release_assembly(db.conn(), release, tax_id, assembly, source).unwrap();
}

fn add_inventory(db: &MetaDb, tax_id: &str, assembly: &str, instance: Option<&str>) {
    testing::insert_inventory_row(
        db.conn(),
        &table(),
        &InventoryRow::new(tax_id, assembly, instance),
    )
    .unwrap();
}

// ── dbSNP assemblies ───────────────────────────────────────────────────

#[test]
fn dbsnp_assemblies_returns_both_accessions() {
    let db = store();
    add_dbsnp(&db, "5", "9606", "GRCh37", "dbSNP");
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");

    let mut assemblies =
        list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &ReleaseVersion::new("5")).unwrap();
    assemblies.sort();
    assert_eq!(assemblies, vec!["GRCh37", "GRCh38"]);
}

#[test]
fn dbsnp_assemblies_empty_is_not_an_error() {
    let db = store();
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");

    let assemblies =
        list_dbsnp_assemblies_for_taxonomy(&db, &tax("10090"), &ReleaseVersion::new("5")).unwrap();
    assert!(assemblies.is_empty());
}

#[test]
fn dbsnp_assemblies_filters_release_and_source() {
    let db = store();
    add_dbsnp(&db, "4", "9606", "GRCh36", "dbSNP");
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");
    add_dbsnp(&db, "5", "9606", "GCA_000001405.28", "EVA");

    let assemblies =
        list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &ReleaseVersion::new("5")).unwrap();
    assert_eq!(assemblies, vec!["GRCh38"]);
}

#[test]
fn dbsnp_assemblies_are_distinct() {
    let db = store();
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");

    let assemblies =
        list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &ReleaseVersion::new("5")).unwrap();
    assert_eq!(assemblies, vec!["GRCh38"]);
}

#[test]
fn dbsnp_assemblies_without_table_is_upstream_error() {
    let db = MetaDb::open_memory().unwrap();
    let err = list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &ReleaseVersion::new("5"))
        .unwrap_err();
    assert!(err.is_upstream());
    assert!(matches!(err, MetaError::DuckDb(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn dbsnp_assemblies_skip_null_accession() {
    let db = store();
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");
    db.conn()
        .execute(
            "INSERT INTO dbsnp_ensembl_species.release_assemblies \
             (release_version, tax_id, assembly_accession, data_source) \
             VALUES ('5', '9606', NULL, 'dbSNP')",
            [],
        )
        .unwrap();

    let assemblies =
        list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &ReleaseVersion::new("5")).unwrap();
    assert_eq!(assemblies, vec!["GRCh38"]);
}

// ── Target instance ────────────────────────────────────────────────────

#[test]
fn target_instance_shared_by_two_assemblies() {
    let db = store();
    add_inventory(&db, "9606", "GRCh37", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let instance = get_target_store_instance(&db, &tax("9606"), &table()).unwrap();
    assert_eq!(instance, "mongo-3");
}

#[test]
fn target_instance_missing_taxonomy_is_not_found() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let err = get_target_store_instance(&db, &tax("1234"), &table()).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("1234"));
    assert!(err.to_string().contains("release_species_inventory"));
}

#[test]
fn target_instance_only_nulls_is_not_found() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", None);

    let err = get_target_store_instance(&db, &tax("9606"), &table()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn target_instance_null_and_value_is_data_integrity() {
    let db = store();
    add_inventory(&db, "9606", "GRCh37", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", None);

    let err = get_target_store_instance(&db, &tax("9606"), &table()).unwrap_err();
    assert!(err.is_data_integrity());
    assert!(err.to_string().contains("NULL, mongo-3"));
}

#[test]
fn target_instance_conflict_is_data_integrity() {
    let db = store();
    add_inventory(&db, "9606", "GRCh37", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", Some("mongo-1"));

    let err = get_target_store_instance(&db, &tax("9606"), &table()).unwrap_err();
    assert!(err.is_data_integrity());
    let msg = err.to_string();
    assert!(msg.contains("9606"));
    assert!(msg.contains("mongo-1, mongo-3"));
}

// ── Release assemblies ─────────────────────────────────────────────────

#[test]
fn release_assemblies_returned_as_stored() {
    let db = store();
    add_inventory(&db, "9606", "GRCh37", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));
    add_inventory(&db, "10090", "GRCm39", Some("mongo-1"));

    let mut assemblies =
        list_release_assemblies_for_taxonomy(&db, &tax("9606"), &table()).unwrap();
    assemblies.sort();
    assert_eq!(assemblies, vec!["GRCh37", "GRCh38"]);
}

#[test]
fn release_assemblies_keep_duplicates() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let assemblies = list_release_assemblies_for_taxonomy(&db, &tax("9606"), &table()).unwrap();
    assert_eq!(assemblies, vec!["GRCh38", "GRCh38"]);
}

#[test]
fn release_assemblies_missing_taxonomy_is_not_found() {
    let db = store();

    let err = list_release_assemblies_for_taxonomy(&db, &tax("1234"), &table()).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("1234"));
}

// ── Inventory entry ────────────────────────────────────────────────────

#[test]
fn inventory_entry_matches_stored_row() {
    let db = store();
    let row = InventoryRow {
        taxonomy_id: "9606",
        scientific_name: "Homo sapiens",
        assembly: "GCA_000001405.15",
        tempmongo_instance: Some("mongo-3"),
        should_be_released: false,
        release_version: 5,
    };
    testing::insert_inventory_row(db.conn(), &table(), &row).unwrap();

    let entry = get_inventory_entry(
        &db,
        &tax("9606"),
        &AssemblyAccession::new("GCA_000001405.15"),
        &table(),
    )
    .unwrap();

    assert_eq!(
        serde_json::to_value(&entry).unwrap(),
        json!({
            "taxonomy_id": "9606",
            "scientific_name": "Homo sapiens",
            "assembly": "GCA_000001405.15",
            "tempmongo_instance": "mongo-3",
            "should_be_released": false,
            "release_version": 5
        })
    );
    assert_eq!(entry.target_instance().as_deref(), Some("mongo-3"));
}

#[test]
fn inventory_entry_missing_pair_is_not_found() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let err = get_inventory_entry(&db, &tax("9606"), &AssemblyAccession::new("GRCh37"), &table())
        .unwrap_err();
    assert!(err.is_not_found());
    let msg = err.to_string();
    assert!(msg.contains("9606"));
    assert!(msg.contains("GRCh37"));
}

#[test]
fn inventory_entry_duplicate_pair_is_data_integrity() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let err = get_inventory_entry(&db, &tax("9606"), &AssemblyAccession::new("GRCh38"), &table())
        .unwrap_err();
    assert!(err.is_data_integrity());
}

#[test]
fn inventory_entry_hostile_key_matches_nothing() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let err = get_inventory_entry(
        &db,
        &tax("9606' OR '1'='1"),
        &AssemblyAccession::new("GRCh38"),
        &table(),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

// ── Cross-cutting ──────────────────────────────────────────────────────

#[test]
fn lookups_are_idempotent() {
    let db = store();
    add_dbsnp(&db, "5", "9606", "GRCh38", "dbSNP");
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));
    add_inventory(&db, "10090", "GRCm39", Some("mongo-1"));
    add_inventory(&db, "10090", "GRCm38", Some("mongo-2"));
    let release = ReleaseVersion::new("5");
    let assembly = AssemblyAccession::new("GRCh38");

    for _ in 0..2 {
        assert_eq!(
            list_dbsnp_assemblies_for_taxonomy(&db, &tax("9606"), &release).unwrap(),
            vec!["GRCh38"]
        );
        assert_eq!(
            get_target_store_instance(&db, &tax("9606"), &table()).unwrap(),
            "mongo-3"
        );
        assert!(get_target_store_instance(&db, &tax("10090"), &table())
            .unwrap_err()
            .is_data_integrity());
        assert_eq!(
            list_release_assemblies_for_taxonomy(&db, &tax("9606"), &table()).unwrap(),
            vec!["GRCh38"]
        );
        assert_eq!(
            get_inventory_entry(&db, &tax("9606"), &assembly, &table())
                .unwrap()
                .assembly()
                .as_deref(),
            Some("GRCh38")
        );
    }
}

#[test]
fn missing_inventory_table_is_upstream_error() {
    let db = MetaDb::open_memory().unwrap();
    let err = get_target_store_instance(&db, &tax("9606"), &table()).unwrap_err();
    assert!(err.is_upstream());
    assert!(!err.is_not_found());
}

#[test]
fn works_with_bare_connection() {
    let db = store();
    add_inventory(&db, "9606", "GRCh38", Some("mongo-3"));

    let instance = get_target_store_instance(db.conn(), &tax("9606"), &table()).unwrap();
    assert_eq!(instance, "mongo-3");
}

#[test]
fn works_with_schema_qualified_table() {
    let qualified = InventoryTable::parse("eva_progress_tracker.release_species_inventory").unwrap();
    let db = testing::empty_store(&qualified).unwrap();
    testing::insert_inventory_row(
        db.conn(),
        &qualified,
        &InventoryRow::new("9606", "GRCh38", Some("mongo-3")),
    )
    .unwrap();

    assert_eq!(
        get_target_store_instance(&db, &tax("9606"), &qualified).unwrap(),
        "mongo-3"
    );
}
