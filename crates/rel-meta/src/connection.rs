//! Metadata store connection wrapper.
//!
//! [`MetaDb`] owns a DuckDB [`Connection`] for callers that do not manage
//! their own. The lookups themselves only borrow a [`QueryExecutor`], so a
//! caller holding a bare `duckdb::Connection` can skip this type entirely.
//!
//! [`QueryExecutor`]: crate::query::QueryExecutor

use crate::error::{MetaError, MetaResult};
use duckdb::{AccessMode, Connection};
use rel_core::MetadataConfig;
use std::path::Path;

/// Path value that selects an in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Wrapper around a DuckDB connection to the metadata store.
///
/// Single-threaded: lookups are sequential blocking reads, so no `Mutex`.
pub struct MetaDb {
    conn: Connection,
}

impl MetaDb {
    /// Open an existing metadata store read-only.
    pub fn open(path: &Path) -> MetaResult<Self> {
        let config = duckdb::Config::default()
            .access_mode(AccessMode::ReadOnly)
            .map_err(|e| MetaError::ConnectionError(e.to_string()))?;
        let conn = Connection::open_with_flags(path, config)
            .map_err(|e| MetaError::ConnectionError(format!("{e}: {}", path.display())))?;
        log::debug!("Opened metadata store read-only: {}", path.display());
        Ok(Self { conn })
    }

    /// Open (or create) a metadata store with write access.
    pub fn open_read_write(path: &Path) -> MetaResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| MetaError::ConnectionError(format!("{e}: {}", path.display())))?;
        log::debug!("Opened metadata store read-write: {}", path.display());
        Ok(Self { conn })
    }

    /// Create an empty in-memory metadata store.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> MetaResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| MetaError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open the store described by a `metadata:` config block.
    ///
    /// `:memory:` yields an empty in-memory store regardless of `read_only`.
    pub fn from_config(config: &MetadataConfig) -> MetaResult<Self> {
        if config.path == MEMORY_PATH {
            return Self::open_memory();
        }
        let path = Path::new(&config.path);
        if config.read_only {
            Self::open(path)
        } else {
            Self::open_read_write(path)
        }
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
