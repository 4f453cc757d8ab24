//! Query execution seam.
//!
//! Lookups never talk to a driver directly: they hand SQL text and bound
//! parameters to a [`QueryExecutor`] and receive ordered rows back. The
//! connection behind the executor is owned by the caller.

use crate::connection::MetaDb;
use crate::error::MetaResult;
use crate::row_helpers::{column_as_json, json_as_text};
use duckdb::Connection;
use serde_json::Value as JsonValue;

/// Rows returned by one query, in store iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Column names from the result set.
    pub columns: Vec<String>,
    /// Rows of decoded values, one entry per column.
    pub rows: Vec<Vec<JsonValue>>,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Text of the first column of every row, SQL NULL as `None`.
    pub fn first_column_values(&self) -> Vec<Option<String>> {
        self.rows
            .iter()
            .map(|row| row.first().and_then(json_as_text))
            .collect()
    }

    /// Text of the first column of every row, skipping SQL NULLs.
    pub fn first_column_text(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|row| row.first().and_then(json_as_text))
            .collect()
    }
}

/// Capability to run one parameterised read query.
///
/// `params` are bound positionally to `?` placeholders; they are never
/// spliced into the SQL text.
pub trait QueryExecutor {
    fn fetch_rows(&self, sql: &str, params: &[&str]) -> MetaResult<QueryResult>;
}

impl QueryExecutor for Connection {
    /// DuckDB 1.4 panics on `stmt.column_count()` before execution, so we
    /// collect all rows via `query_map` first, then read column metadata.
    /// Driver errors keep their source as [`crate::MetaError::DuckDb`].
    fn fetch_rows(&self, sql: &str, params: &[&str]) -> MetaResult<QueryResult> {
        let mut stmt = self.prepare(sql)?;

        let rows: Vec<Vec<JsonValue>> = stmt
            .query_map(duckdb::params_from_iter(params.iter().copied()), |row| {
                let col_count = row.as_ref().column_count();
                (0..col_count)
                    .map(|i| column_as_json(row, i))
                    .collect::<duckdb::Result<Vec<JsonValue>>>()
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let columns: Vec<String> = (0..stmt.column_count())
            .map(|i| {
                stmt.column_name(i)
                    .map_or("?".to_string(), |v| v.to_string())
            })
            .collect();

        Ok(QueryResult { columns, rows })
    }
}

impl QueryExecutor for MetaDb {
    fn fetch_rows(&self, sql: &str, params: &[&str]) -> MetaResult<QueryResult> {
        self.conn().fetch_rows(sql, params)
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
