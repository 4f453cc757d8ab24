//! Validated name of a species inventory table.
//!
//! The inventory table differs per deployment and release, so its name comes
//! from configuration or the command line and has to be spliced into SQL
//! text. [`InventoryTable`] guarantees the name is a plain, optionally
//! schema-qualified identifier before that ever happens.

use crate::error::{CoreError, CoreResult};
use crate::sql_utils::{is_plain_ident, quote_qualified, MAX_QUALIFIED_PARTS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, possibly schema-qualified inventory table name
/// (e.g. `eva_progress_tracker.release_species_inventory`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InventoryTable(String);

impl InventoryTable {
    /// Validate a table name.
    ///
    /// Each dot-separated part must match `[A-Za-z_][A-Za-z0-9_]*` and at
    /// most three parts are allowed.
    pub fn parse(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        let invalid = |reason: &str| CoreError::InvalidIdentifier {
            kind: "inventory table",
            value: name.clone(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = name.split('.').collect();
        if parts.len() > MAX_QUALIFIED_PARTS {
            return Err(invalid("at most catalog.schema.table is allowed"));
        }
        if let Some(bad) = parts.iter().find(|p| !is_plain_ident(p)) {
            let reason = if bad.is_empty() {
                "contains an empty name part".to_string()
            } else {
                format!("'{bad}' must contain only letters, digits and underscores")
            };
            return Err(invalid(&reason));
        }
        Ok(Self(name))
    }

    /// Return the name as written in configuration.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return the name quoted for use in SQL text.
    pub fn quoted(&self) -> String {
        quote_qualified(&self.0)
    }
}

impl fmt::Display for InventoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InventoryTable {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InventoryTable {
    type Error = CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<InventoryTable> for String {
    fn from(table: InventoryTable) -> Self {
        table.0
    }
}

impl AsRef<str> for InventoryTable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
