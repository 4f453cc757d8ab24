//! Error types for metadata lookups.

use thiserror::Error;

/// Metadata lookup errors.
#[derive(Error, Debug)]
pub enum MetaError {
    /// Failed to open the metadata store (M001).
    #[error("[M001] Metadata store connection failed: {0}")]
    ConnectionError(String),

    /// SQL execution error inside the metadata store (M002).
    #[error("[M002] Metadata query failed: {0}")]
    QueryError(String),

    /// A record the lookup requires is absent (M003).
    #[error("[M003] Not found: {0}")]
    NotFound(String),

    /// Stored data breaks a uniqueness rule the lookup relies on (M004).
    #[error("[M004] Data integrity violation: {0}")]
    DataIntegrity(String),

    /// DuckDB driver error with preserved source chain (M005).
    #[error("[M005] DuckDB error")]
    DuckDb(#[source] duckdb::Error),
}

/// Result type alias for [`MetaError`].
pub type MetaResult<T> = Result<T, MetaError>;

impl MetaError {
    /// True for [`MetaError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, MetaError::NotFound(_))
    }

    /// True for [`MetaError::DataIntegrity`].
    pub fn is_data_integrity(&self) -> bool {
        matches!(self, MetaError::DataIntegrity(_))
    }

    /// True for failures raised by the store itself rather than by a
    /// lookup's cardinality rules.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            MetaError::ConnectionError(_) | MetaError::QueryError(_) | MetaError::DuckDb(_)
        )
    }
}

impl From<duckdb::Error> for MetaError {
    fn from(err: duckdb::Error) -> Self {
        MetaError::DuckDb(err)
    }
}
