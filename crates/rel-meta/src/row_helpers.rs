//! Shared helpers for decoding DuckDB row columns.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use duckdb::types::{FromSql, Value};
use serde_json::Value as JsonValue;

/// Decode a column into a JSON value, keeping its type where JSON has one.
///
/// Integers and booleans stay typed, temporal values become ISO-8601
/// strings, and anything without a JSON counterpart falls back to its string
/// coercion. A column that cannot be read is an error, never a NULL.
pub(crate) fn column_as_json(row: &duckdb::Row<'_>, idx: usize) -> duckdb::Result<JsonValue> {
    let json = match row.get::<_, Value>(idx)? {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => b.into(),
        Value::TinyInt(n) => n.into(),
        Value::SmallInt(n) => n.into(),
        Value::Int(n) => n.into(),
        Value::BigInt(n) => n.into(),
        Value::UTinyInt(n) => n.into(),
        Value::USmallInt(n) => n.into(),
        Value::UInt(n) => n.into(),
        Value::UBigInt(n) => n.into(),
        Value::HugeInt(n) => JsonValue::String(n.to_string()),
        Value::Float(f) => float_json(f64::from(f)),
        Value::Double(f) => float_json(f),
        Value::Text(s) => JsonValue::String(s),
        Value::Timestamp(..) => temporal_json::<NaiveDateTime>(row, idx)?,
        Value::Date32(_) => temporal_json::<NaiveDate>(row, idx)?,
        Value::Time64(..) => temporal_json::<NaiveTime>(row, idx)?,
        _ => JsonValue::String(get_column_as_string(row, idx)),
    };
    Ok(json)
}

fn float_json(f: f64) -> JsonValue {
    serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
}

fn temporal_json<T: FromSql + ToString>(
    row: &duckdb::Row<'_>,
    idx: usize,
) -> duckdb::Result<JsonValue> {
    row.get::<_, T>(idx).map(|t| JsonValue::String(t.to_string()))
}

/// Read a column value as a String, trying multiple DuckDB types.
///
/// DuckDB integer columns return `None` for `Option<String>`, so we try
/// String -> i64 -> f64 -> bool -> "null".
pub(crate) fn get_column_as_string(row: &duckdb::Row<'_>, idx: usize) -> String {
    if let Ok(Some(s)) = row.get::<_, Option<String>>(idx) {
        return s;
    }
    if let Ok(Some(n)) = row.get::<_, Option<i64>>(idx) {
        return n.to_string();
    }
    if let Ok(Some(f)) = row.get::<_, Option<f64>>(idx) {
        return f.to_string();
    }
    if let Ok(Some(b)) = row.get::<_, Option<bool>>(idx) {
        return b.to_string();
    }
    "null".to_string()
}

/// Render a decoded value as lookup text.
///
/// Identifier columns may be stored as integers (`taxonomy_id`) or text, so
/// numbers and booleans are rendered rather than rejected. SQL NULL has no
/// text form.
pub(crate) fn json_as_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
