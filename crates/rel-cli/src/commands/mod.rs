//! CLI command implementations

pub(crate) mod categories;
pub(crate) mod common;
pub(crate) mod lookup;
pub(crate) mod plan;
