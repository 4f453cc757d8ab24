//! Lookups against the metadata store.
//!
//! - [`executor`]: The query-execution seam and its DuckDB implementation
//! - [`release`]: dbSNP assembly, target instance, and inventory lookups
//! - [`plan`]: Composes the lookups into a per-taxonomy release plan

pub mod executor;
pub mod plan;
pub mod release;

pub use executor::{QueryExecutor, QueryResult};
pub use plan::{release_plan, AssemblyPlan, ReleasePlan};
pub use release::{
    get_inventory_entry, get_target_store_instance, list_dbsnp_assemblies_for_taxonomy,
    list_release_assemblies_for_taxonomy,
};
