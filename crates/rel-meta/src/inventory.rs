//! Species inventory records.
//!
//! An inventory row is returned with its column names preserved, so callers
//! read settings by name and never depend on the table's column order.

use crate::row_helpers::json_as_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Inventory column holding the taxonomy key.
pub const TAXONOMY_COLUMN: &str = "taxonomy_id";

/// Inventory column holding the assembly key.
pub const ASSEMBLY_COLUMN: &str = "assembly";

/// Inventory column naming the document-store instance a taxonomy is
/// released into.
pub const TARGET_INSTANCE_COLUMN: &str = "tempmongo_instance";

/// One row of a species inventory table, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryEntry {
    fields: Map<String, JsonValue>,
}

impl InventoryEntry {
    /// Pair column names with one row's values.
    ///
    /// Extra values beyond `columns` are dropped; missing values are absent.
    pub fn from_row(columns: &[String], values: Vec<JsonValue>) -> Self {
        let fields = columns.iter().cloned().zip(values).collect();
        Self { fields }
    }

    /// Raw value of a column, `None` if the column does not exist.
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.fields.get(field)
    }

    /// Column rendered as text; `None` if absent or NULL.
    pub fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(json_as_text)
    }

    pub fn taxonomy_id(&self) -> Option<String> {
        self.text(TAXONOMY_COLUMN)
    }

    pub fn assembly(&self) -> Option<String> {
        self.text(ASSEMBLY_COLUMN)
    }

    pub fn target_instance(&self) -> Option<String> {
        self.text(TARGET_INSTANCE_COLUMN)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, JsonValue> {
        self.fields
    }
}
