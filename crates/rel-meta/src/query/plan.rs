//! Per-taxonomy release plan.
//!
//! Gathers everything a release run needs to know about one taxonomy: where
//! its data goes, which assemblies it releases with their inventory settings,
//! which of those came from the dbSNP import, and which files each assembly
//! produces. Any failed lookup fails the whole plan.

use crate::error::{MetaError, MetaResult};
use crate::inventory::InventoryEntry;
use crate::query::executor::QueryExecutor;
use crate::query::release::{
    get_inventory_entry, get_target_store_instance, list_dbsnp_assemblies_for_taxonomy,
    list_release_assemblies_for_taxonomy,
};
use rel_core::release_files::release_file_names;
use rel_core::{AssemblyAccession, InventoryTable, ReleaseVersion, TaxonomyId};
use serde::Serialize;
use std::collections::HashSet;

/// Release settings for one taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleasePlan {
    pub taxonomy_id: TaxonomyId,
    pub release_version: ReleaseVersion,
    pub inventory_table: InventoryTable,
    pub target_instance: String,
    /// dbSNP assemblies imported for this release, sorted.
    pub dbsnp_assemblies: Vec<String>,
    /// Inventory assemblies in first-seen order, without duplicates.
    pub assemblies: Vec<AssemblyPlan>,
}

/// Release settings for one assembly of a taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyPlan {
    pub assembly: AssemblyAccession,
    pub from_dbsnp_import: bool,
    pub inventory: InventoryEntry,
    pub release_files: Vec<String>,
}

/// Build the release plan of a taxonomy.
pub fn release_plan<E: QueryExecutor + ?Sized>(
    exec: &E,
    taxonomy_id: &TaxonomyId,
    release_version: &ReleaseVersion,
    inventory_table: &InventoryTable,
) -> MetaResult<ReleasePlan> {
    let target_instance = get_target_store_instance(exec, taxonomy_id, inventory_table)?;
    let mut dbsnp_assemblies =
        list_dbsnp_assemblies_for_taxonomy(exec, taxonomy_id, release_version)?;
    dbsnp_assemblies.sort();

    let mut seen = HashSet::new();
    let mut assemblies = Vec::new();
    for raw in list_release_assemblies_for_taxonomy(exec, taxonomy_id, inventory_table)? {
        if !seen.insert(raw.clone()) {
            continue;
        }
        let assembly = AssemblyAccession::parse(raw).map_err(|e| {
            MetaError::DataIntegrity(format!(
                "taxonomy {taxonomy_id} has an unusable assembly in {inventory_table}: {e}"
            ))
        })?;
        let inventory = get_inventory_entry(exec, taxonomy_id, &assembly, inventory_table)?;
        assemblies.push(AssemblyPlan {
            from_dbsnp_import: dbsnp_assemblies.iter().any(|a| a == assembly.as_str()),
            release_files: release_file_names(assembly.as_str()),
            inventory,
            assembly,
        });
    }
    log::debug!(
        "Release plan for taxonomy {taxonomy_id}: {} assemblies on {target_instance}",
        assemblies.len()
    );

    Ok(ReleasePlan {
        taxonomy_id: taxonomy_id.clone(),
        release_version: release_version.clone(),
        inventory_table: inventory_table.clone(),
        target_instance,
        dbsnp_assemblies,
        assemblies,
    })
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
