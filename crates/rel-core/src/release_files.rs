//! Release file categories produced for every released assembly.
//!
//! Active identifiers (current, merged and multimapped) are published as VCF;
//! deprecated identifiers only carry an accession, so they are published as
//! plain text.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File format of a release file category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseFileKind {
    /// Variant Call Format
    Vcf,
    /// One accession per line
    Text,
}

impl ReleaseFileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseFileKind::Vcf => "vcf",
            ReleaseFileKind::Text => "text",
        }
    }

    /// File extension without the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            ReleaseFileKind::Vcf => "vcf",
            ReleaseFileKind::Text => "txt",
        }
    }
}

/// One category of file in a per-assembly release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseFileCategory {
    CurrentIds,
    MergedIds,
    MultimapIds,
    DeprecatedIds,
    MergedDeprecatedIds,
}

impl ReleaseFileCategory {
    /// Every category, VCF categories first.
    pub const ALL: [ReleaseFileCategory; 5] = [
        ReleaseFileCategory::CurrentIds,
        ReleaseFileCategory::MergedIds,
        ReleaseFileCategory::MultimapIds,
        ReleaseFileCategory::DeprecatedIds,
        ReleaseFileCategory::MergedDeprecatedIds,
    ];

    /// Categories released as VCF.
    pub const VCF: [ReleaseFileCategory; 3] = [
        ReleaseFileCategory::CurrentIds,
        ReleaseFileCategory::MergedIds,
        ReleaseFileCategory::MultimapIds,
    ];

    /// Categories released as plain text.
    pub const TEXT: [ReleaseFileCategory; 2] = [
        ReleaseFileCategory::DeprecatedIds,
        ReleaseFileCategory::MergedDeprecatedIds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseFileCategory::CurrentIds => "current_ids",
            ReleaseFileCategory::MergedIds => "merged_ids",
            ReleaseFileCategory::MultimapIds => "multimap_ids",
            ReleaseFileCategory::DeprecatedIds => "deprecated_ids",
            ReleaseFileCategory::MergedDeprecatedIds => "merged_deprecated_ids",
        }
    }

    pub fn kind(self) -> ReleaseFileKind {
        match self {
            ReleaseFileCategory::CurrentIds
            | ReleaseFileCategory::MergedIds
            | ReleaseFileCategory::MultimapIds => ReleaseFileKind::Vcf,
            ReleaseFileCategory::DeprecatedIds | ReleaseFileCategory::MergedDeprecatedIds => {
                ReleaseFileKind::Text
            }
        }
    }

    pub fn file_extension(self) -> &'static str {
        self.kind().extension()
    }

    /// Release file name for an assembly: `<assembly>_<category>.<ext>`.
    pub fn file_name(self, assembly: &str) -> String {
        format!("{assembly}_{}.{}", self.as_str(), self.file_extension())
    }
}

impl fmt::Display for ReleaseFileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseFileCategory {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownFileCategory(s.to_string()))
    }
}

/// Every release file name expected for `assembly`, in [`ReleaseFileCategory::ALL`] order.
pub fn release_file_names(assembly: &str) -> Vec<String> {
    ReleaseFileCategory::ALL
        .iter()
        .map(|c| c.file_name(assembly))
        .collect()
}

/// Parse a category name, for callers that only have a string.
pub fn parse_category(name: &str) -> CoreResult<ReleaseFileCategory> {
    name.parse()
}

#[cfg(test)]
#[path = "release_files_test.rs"]
mod tests;
