//! Plan command implementation

use anyhow::{Context, Result};
use rel_meta::query::{release_plan, ReleasePlan};

use crate::cli::{GlobalArgs, ReleaseTaxonomyArgs};
use crate::commands::common::{format_table, print_json};
use crate::context::RuntimeContext;

/// Execute the plan command
pub(crate) fn execute(args: &ReleaseTaxonomyArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let plan = build_plan(&ctx, args)?;
    if global.json {
        print_json(&plan)
    } else {
        println!("{}", plan_text(&plan));
        Ok(())
    }
}

fn build_plan(ctx: &RuntimeContext, args: &ReleaseTaxonomyArgs) -> Result<ReleasePlan> {
    let release = ctx.release_version(args.release.as_ref());
    release_plan(
        &ctx.db,
        &args.taxonomy,
        release,
        &ctx.settings.inventory_table,
    )
    .with_context(|| {
        format!(
            "Failed to build the release plan of taxonomy {} for release {}",
            args.taxonomy, release
        )
    })
}

/// Human-readable summary of a release plan.
fn plan_text(plan: &ReleasePlan) -> String {
    let mut out = format!(
        "Taxonomy {} (release {}) -> {}\nInventory: {}\n",
        plan.taxonomy_id, plan.release_version, plan.target_instance, plan.inventory_table
    );
    if plan.dbsnp_assemblies.is_empty() {
        out.push_str("dbSNP assemblies: none\n");
    } else {
        out.push_str(&format!(
            "dbSNP assemblies: {}\n",
            plan.dbsnp_assemblies.join(", ")
        ));
    }
    out.push('\n');

    let rows: Vec<Vec<String>> = plan
        .assemblies
        .iter()
        .map(|a| {
            vec![
                a.assembly.to_string(),
                if a.from_dbsnp_import { "yes" } else { "no" }.to_string(),
                a.release_files.len().to_string(),
            ]
        })
        .collect();
    out.push_str(&format_table(&["assembly", "dbsnp", "files"], &rows));
    out
}
