//! SQL identifier helpers
//!
//! Values are always bound as statement parameters. Identifiers cannot be
//! bound, so the few that vary per deployment are validated first and then
//! quoted with these helpers.

/// Maximum number of dot-separated parts in a qualified name
/// (`catalog.schema.table`).
pub const MAX_QUALIFIED_PARTS: usize = 3;

/// Quote a SQL identifier.
///
/// Wraps the identifier in double quotes and doubles any embedded double
/// quote, following the SQL standard.
///
/// # Examples
/// ```
/// use rel_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("release_assemblies"), r#""release_assemblies""#);
/// assert_eq!(quote_ident(r#"odd"name"#), r#""odd""name""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote each part of a dot-separated qualified name.
///
/// # Examples
/// ```
/// use rel_core::sql_utils::quote_qualified;
/// assert_eq!(
///     quote_qualified("eva_progress_tracker.release_species_inventory"),
///     r#""eva_progress_tracker"."release_species_inventory""#
/// );
/// ```
pub fn quote_qualified(name: &str) -> String {
    name.split('.')
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(".")
}

/// Check that one identifier part only uses `[A-Za-z0-9_]` and does not
/// start with a digit.
pub fn is_plain_ident(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
