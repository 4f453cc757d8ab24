//! rel-core - Core library for release metadata lookups
//!
//! This crate provides the identifier types, inventory table naming rules,
//! release file layout, and configuration parsing shared by the metadata
//! lookup layer and the `relmeta` CLI.

pub mod config;
pub mod error;
pub mod identifiers;
pub mod inventory_table;
mod newtype_string;
pub mod release_files;
pub mod sql_utils;

pub use config::{Config, MetadataConfig};
pub use error::{CoreError, CoreResult};
pub use identifiers::{AssemblyAccession, ReleaseVersion, TaxonomyId};
pub use inventory_table::InventoryTable;
pub use release_files::{ReleaseFileCategory, ReleaseFileKind};
