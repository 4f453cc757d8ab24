//! Strongly-typed identifiers used as lookup keys.
//!
//! All three are opaque to the lookup layer: they are bound verbatim as query
//! parameters and never interpreted.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// Species taxonomy identifier, e.g. `9606`.
    ///
    /// The primary partition key for release data.
    pub struct TaxonomyId("taxonomy ID");
}

define_identifier! {
    /// Reference genome assembly accession, e.g. `GCA_000001405.15`.
    pub struct AssemblyAccession("assembly accession");
}

define_identifier! {
    /// Release cycle identifier, e.g. `5`.
    pub struct ReleaseVersion("release version");
}

#[cfg(test)]
#[path = "identifiers_test.rs"]
mod tests;
