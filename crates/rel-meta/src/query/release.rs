//! Release metadata lookups.
//!
//! Each lookup issues exactly one parameterised query and then applies its
//! cardinality contract:
//!
//! | Lookup | 0 rows | 1 row | >1 rows |
//! |---|---|---|---|
//! | [`list_dbsnp_assemblies_for_taxonomy`] | empty | ok | ok |
//! | [`get_target_store_instance`] | `NotFound` | ok | `DataIntegrity` |
//! | [`list_release_assemblies_for_taxonomy`] | `NotFound` | ok | ok |
//! | [`get_inventory_entry`] | `NotFound` | ok | `DataIntegrity` |
//!
//! Store failures pass through untouched; DuckDB errors arrive as
//! [`MetaError::DuckDb`] with the driver error as their source.

use crate::error::{MetaError, MetaResult};
use crate::inventory::{
    InventoryEntry, ASSEMBLY_COLUMN, TARGET_INSTANCE_COLUMN, TAXONOMY_COLUMN,
};
use crate::query::executor::QueryExecutor;
use rel_core::{AssemblyAccession, InventoryTable, ReleaseVersion, TaxonomyId};

/// Assembly-import records maintained for dbSNP species.
pub const DBSNP_RELEASE_ASSEMBLIES_TABLE: &str = "dbsnp_ensembl_species.release_assemblies";

/// `data_source` value of assemblies imported from dbSNP.
pub const DBSNP_DATA_SOURCE: &str = "dbSNP";

const DBSNP_ASSEMBLIES_SQL: &str = "SELECT DISTINCT assembly_accession \
     FROM dbsnp_ensembl_species.release_assemblies \
     WHERE release_version = ? AND data_source = ? AND tax_id = ? \
     AND assembly_accession IS NOT NULL";

/// Distinct dbSNP assemblies imported for a species in a release.
///
/// No matches is a normal outcome and yields an empty vector. Order follows
/// the store and must not be relied on.
pub fn list_dbsnp_assemblies_for_taxonomy<E: QueryExecutor + ?Sized>(
    exec: &E,
    taxonomy_id: &TaxonomyId,
    release_version: &ReleaseVersion,
) -> MetaResult<Vec<String>> {
    log::debug!(
        "Looking up dbSNP assemblies for taxonomy {taxonomy_id} in release {release_version}"
    );
    let result = exec.fetch_rows(
        DBSNP_ASSEMBLIES_SQL,
        &[
            release_version.as_str(),
            DBSNP_DATA_SOURCE,
            taxonomy_id.as_str(),
        ],
    )?;
    Ok(result.first_column_text())
}

/// The single document-store instance configured for a taxonomy.
///
/// Every inventory row of a taxonomy must name the same instance. No rows,
/// or only NULL instances, is [`MetaError::NotFound`]. Several distinct
/// values is [`MetaError::DataIntegrity`], and a NULL next to a named
/// instance counts as a distinct value.
pub fn get_target_store_instance<E: QueryExecutor + ?Sized>(
    exec: &E,
    taxonomy_id: &TaxonomyId,
    inventory_table: &InventoryTable,
) -> MetaResult<String> {
    log::debug!("Looking up target instance for taxonomy {taxonomy_id} in {inventory_table}");
    let sql = format!(
        "SELECT DISTINCT {TARGET_INSTANCE_COLUMN} FROM {} WHERE {TAXONOMY_COLUMN} = ?",
        inventory_table.quoted()
    );
    let mut instances = exec
        .fetch_rows(&sql, &[taxonomy_id.as_str()])?
        .first_column_values();
    instances.sort();
    instances.dedup();

    match instances.as_slice() {
        [] | [None] => Err(MetaError::NotFound(format!(
            "no target instance configured for taxonomy {taxonomy_id} in {inventory_table}"
        ))),
        [Some(instance)] => Ok(instance.clone()),
        many => {
            let rendered: Vec<&str> = many
                .iter()
                .map(|i| i.as_deref().unwrap_or("NULL"))
                .collect();
            log::warn!(
                "Taxonomy {taxonomy_id} has {} target instances in {inventory_table}",
                rendered.len()
            );
            Err(MetaError::DataIntegrity(format!(
                "taxonomy {taxonomy_id} maps to more than one target instance in {inventory_table}: {}",
                rendered.join(", ")
            )))
        }
    }
}

/// Every assembly recorded for a taxonomy in the inventory, as stored.
///
/// Duplicates are kept and order follows the store. A taxonomy with no
/// inventory rows is [`MetaError::NotFound`].
pub fn list_release_assemblies_for_taxonomy<E: QueryExecutor + ?Sized>(
    exec: &E,
    taxonomy_id: &TaxonomyId,
    inventory_table: &InventoryTable,
) -> MetaResult<Vec<String>> {
    log::debug!("Looking up release assemblies for taxonomy {taxonomy_id} in {inventory_table}");
    let sql = format!(
        "SELECT {ASSEMBLY_COLUMN} FROM {} \
         WHERE {TAXONOMY_COLUMN} = ? AND {ASSEMBLY_COLUMN} IS NOT NULL",
        inventory_table.quoted()
    );
    let assemblies = exec
        .fetch_rows(&sql, &[taxonomy_id.as_str()])?
        .first_column_text();

    if assemblies.is_empty() {
        return Err(MetaError::NotFound(format!(
            "no assemblies found for taxonomy {taxonomy_id} in {inventory_table}"
        )));
    }
    Ok(assemblies)
}

/// The inventory row for one taxonomy and assembly, with named fields.
///
/// The pair is expected to be unique; duplicates are reported as
/// [`MetaError::DataIntegrity`] rather than resolved arbitrarily.
pub fn get_inventory_entry<E: QueryExecutor + ?Sized>(
    exec: &E,
    taxonomy_id: &TaxonomyId,
    assembly_accession: &AssemblyAccession,
    inventory_table: &InventoryTable,
) -> MetaResult<InventoryEntry> {
    log::debug!(
        "Looking up inventory entry for taxonomy {taxonomy_id}, assembly {assembly_accession} in {inventory_table}"
    );
    let sql = format!(
        "SELECT * FROM {} WHERE {TAXONOMY_COLUMN} = ? AND {ASSEMBLY_COLUMN} = ?",
        inventory_table.quoted()
    );
    let result = exec.fetch_rows(&sql, &[taxonomy_id.as_str(), assembly_accession.as_str()])?;

    let count = result.len();
    let mut rows = result.rows.into_iter();
    match (rows.next(), count) {
        (None, _) => Err(MetaError::NotFound(format!(
            "no inventory entry for taxonomy {taxonomy_id} and assembly {assembly_accession} in {inventory_table}"
        ))),
        (Some(row), 1) => Ok(InventoryEntry::from_row(&result.columns, row)),
        (Some(_), n) => {
            log::warn!(
                "Taxonomy {taxonomy_id} and assembly {assembly_accession} have {n} rows in {inventory_table}"
            );
            Err(MetaError::DataIntegrity(format!(
                "{n} inventory entries for taxonomy {taxonomy_id} and assembly {assembly_accession} in {inventory_table}, expected one"
            )))
        }
    }
}

#[cfg(test)]
#[path = "release_test.rs"]
mod tests;
