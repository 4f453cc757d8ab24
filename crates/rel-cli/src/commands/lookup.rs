//! Single-lookup commands: dbsnp-assemblies, target-instance, assemblies, inventory

use anyhow::{Context, Result};
use rel_meta::query::{
    get_inventory_entry, get_target_store_instance, list_dbsnp_assemblies_for_taxonomy,
    list_release_assemblies_for_taxonomy,
};
use rel_meta::InventoryEntry;
use serde_json::json;

use crate::cli::{GlobalArgs, InventoryArgs, ReleaseTaxonomyArgs, TaxonomyArgs};
use crate::commands::common::{cell_text, format_table, print_json, print_values};
use crate::context::RuntimeContext;

/// Execute the dbsnp-assemblies command
pub(crate) fn dbsnp_assemblies(args: &ReleaseTaxonomyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let assemblies = fetch_dbsnp_assemblies(&ctx, args)?;
    if assemblies.is_empty() && !global.json {
        eprintln!(
            "No dbSNP assemblies for taxonomy {} in release {}",
            args.taxonomy,
            ctx.release_version(args.release.as_ref())
        );
    }
    print_values(&assemblies, global.json)
}

fn fetch_dbsnp_assemblies(ctx: &RuntimeContext, args: &ReleaseTaxonomyArgs) -> Result<Vec<String>> {
    let release = ctx.release_version(args.release.as_ref());
    let mut assemblies = list_dbsnp_assemblies_for_taxonomy(&ctx.db, &args.taxonomy, release)
        .with_context(|| {
            format!(
                "Failed to list dbSNP assemblies for taxonomy {} in release {}",
                args.taxonomy, release
            )
        })?;
    assemblies.sort();
    Ok(assemblies)
}

/// Execute the target-instance command
pub(crate) fn target_instance(args: &TaxonomyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let instance = fetch_target_instance(&ctx, args)?;
    if global.json {
        print_json(&json!({
            "taxonomy_id": args.taxonomy,
            "target_instance": instance,
        }))
    } else {
        println!("{instance}");
        Ok(())
    }
}

fn fetch_target_instance(ctx: &RuntimeContext, args: &TaxonomyArgs) -> Result<String> {
    get_target_store_instance(&ctx.db, &args.taxonomy, &ctx.settings.inventory_table)
        .with_context(|| {
            format!(
                "Failed to look up the target instance of taxonomy {}",
                args.taxonomy
            )
        })
}

/// Execute the assemblies command
pub(crate) fn assemblies(args: &TaxonomyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let assemblies = fetch_assemblies(&ctx, args)?;
    print_values(&assemblies, global.json)
}

fn fetch_assemblies(ctx: &RuntimeContext, args: &TaxonomyArgs) -> Result<Vec<String>> {
    let mut assemblies =
        list_release_assemblies_for_taxonomy(&ctx.db, &args.taxonomy, &ctx.settings.inventory_table)
            .with_context(|| format!("Failed to list assemblies of taxonomy {}", args.taxonomy))?;
    assemblies.sort();
    Ok(assemblies)
}

/// Execute the inventory command
pub(crate) fn inventory(args: &InventoryArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let entry = fetch_inventory(&ctx, args)?;
    if global.json {
        print_json(&entry)
    } else {
        println!("{}", inventory_table_text(&entry));
        Ok(())
    }
}

fn fetch_inventory(ctx: &RuntimeContext, args: &InventoryArgs) -> Result<InventoryEntry> {
    get_inventory_entry(
        &ctx.db,
        &args.taxonomy,
        &args.assembly,
        &ctx.settings.inventory_table,
    )
    .with_context(|| {
        format!(
            "Failed to read the inventory entry of taxonomy {} assembly {}",
            args.taxonomy, args.assembly
        )
    })
}

/// Two-column field/value table of an inventory entry, sorted by field name.
pub(crate) fn inventory_table_text(entry: &InventoryEntry) -> String {
    let rows: Vec<Vec<String>> = entry
        .fields()
        .iter()
        .map(|(name, value)| vec![name.clone(), cell_text(value)])
        .collect();
    format_table(&["field", "value"], &rows)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
