//! Fixtures for building a metadata store in tests.
//!
//! The real store is created and populated outside this crate. These helpers
//! recreate the slice of its schema the lookups read, so unit and integration
//! tests can seed rows and run the lookups against DuckDB.

use crate::error::{MetaError, MetaResult};
use crate::MetaDb;
use duckdb::Connection;
use rel_core::sql_utils::quote_ident;
use rel_core::InventoryTable;

/// DDL for the dbSNP assembly-import table.
pub const RELEASE_ASSEMBLIES_DDL: &str = include_str!("release_assemblies.sql");

/// Column list of a species inventory table, used by [`create_inventory_table`].
pub const INVENTORY_COLUMNS_DDL: &str = include_str!("inventory_columns.sql");

/// One species inventory row.
#[derive(Debug, Clone)]
pub struct InventoryRow<'a> {
    pub taxonomy_id: &'a str,
    pub scientific_name: &'a str,
    pub assembly: &'a str,
    pub tempmongo_instance: Option<&'a str>,
    pub should_be_released: bool,
    pub release_version: i32,
}

impl<'a> InventoryRow<'a> {
    /// A releasable row with placeholder settings.
    pub fn new(taxonomy_id: &'a str, assembly: &'a str, instance: Option<&'a str>) -> Self {
        Self {
            taxonomy_id,
            scientific_name: "unknown",
            assembly,
            tempmongo_instance: instance,
            should_be_released: true,
            release_version: 5,
        }
    }
}

/// Create the `dbsnp_ensembl_species.release_assemblies` table.
pub fn create_release_assemblies(conn: &Connection) -> MetaResult<()> {
    conn.execute_batch(RELEASE_ASSEMBLIES_DDL)
        .map_err(|e| MetaError::QueryError(format!("create release_assemblies failed: {e}")))
}

/// Insert one dbSNP assembly-import record.
pub fn insert_release_assembly(
    conn: &Connection,
    release_version: &str,
    tax_id: &str,
    assembly_accession: &str,
    data_source: &str,
) -> MetaResult<()> {
    conn.execute(
        "INSERT INTO dbsnp_ensembl_species.release_assemblies \
         (release_version, tax_id, assembly_accession, data_source) VALUES (?, ?, ?, ?)",
        duckdb::params![release_version, tax_id, assembly_accession, data_source],
    )
    .map_err(|e| MetaError::QueryError(format!("insert release_assemblies failed: {e}")))?;
    Ok(())
}

/// Create an inventory table, and its schema when the name is qualified.
pub fn create_inventory_table(conn: &Connection, table: &InventoryTable) -> MetaResult<()> {
    let parts: Vec<&str> = table.as_str().split('.').collect();
    if parts.len() == 2 {
        conn.execute_batch(&format!(
            "CREATE SCHEMA IF NOT EXISTS {}",
            quote_ident(parts[0])
        ))
        .map_err(|e| MetaError::QueryError(format!("create schema failed: {e}")))?;
    }
    conn.execute_batch(&format!(
        "CREATE TABLE {} ({INVENTORY_COLUMNS_DDL})",
        table.quoted()
    ))
    .map_err(|e| MetaError::QueryError(format!("create {table} failed: {e}")))
}

/// Insert one inventory row.
pub fn insert_inventory_row(
    conn: &Connection,
    table: &InventoryTable,
    row: &InventoryRow<'_>,
) -> MetaResult<()> {
    conn.execute(
        &format!(
            "INSERT INTO {} (taxonomy_id, scientific_name, assembly, tempmongo_instance, \
             should_be_released, release_version) VALUES (?, ?, ?, ?, ?, ?)",
            table.quoted()
        ),
        duckdb::params![
            row.taxonomy_id,
            row.scientific_name,
            row.assembly,
            row.tempmongo_instance,
            row.should_be_released,
            row.release_version
        ],
    )
    .map_err(|e| MetaError::QueryError(format!("insert into {table} failed: {e}")))?;
    Ok(())
}

/// In-memory store with the dbSNP table and an empty inventory table.
pub fn empty_store(table: &InventoryTable) -> MetaResult<MetaDb> {
    let db = MetaDb::open_memory()?;
    create_release_assemblies(db.conn())?;
    create_inventory_table(db.conn(), table)?;
    Ok(db)
}
