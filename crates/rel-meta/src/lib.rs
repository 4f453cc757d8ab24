//! Release metadata lookups.
//!
//! Answers the questions a release run asks of the metadata store: which
//! dbSNP assemblies a species imports in a release, which document-store
//! instance receives a taxonomy, and which assemblies and inventory settings
//! apply to it. Every lookup is a single read with an explicit cardinality
//! contract; violations surface as typed [`MetaError`] variants.

pub mod connection;
pub mod error;
pub mod inventory;
pub mod query;
pub(crate) mod row_helpers;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use connection::MetaDb;
pub use error::{MetaError, MetaResult};
pub use inventory::InventoryEntry;
pub use query::{QueryExecutor, QueryResult};
