//! Categories command implementation

use anyhow::Result;
use rel_core::{ReleaseFileCategory, ReleaseFileKind};
use serde::Serialize;

use crate::cli::GlobalArgs;
use crate::commands::common::{format_table, print_json};

#[derive(Serialize)]
struct CategoryInfo {
    category: ReleaseFileCategory,
    kind: ReleaseFileKind,
    extension: &'static str,
}

fn category_infos() -> Vec<CategoryInfo> {
    ReleaseFileCategory::ALL
        .iter()
        .map(|&category| CategoryInfo {
            category,
            kind: category.kind(),
            extension: category.file_extension(),
        })
        .collect()
}

/// Execute the categories command
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let infos = category_infos();
    if global.json {
        return print_json(&infos);
    }

    let rows: Vec<Vec<String>> = infos
        .iter()
        .map(|info| {
            vec![
                info.category.to_string(),
                info.kind.as_str().to_string(),
                info.extension.to_string(),
            ]
        })
        .collect();
    println!("{}", format_table(&["category", "kind", "extension"], &rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_infos_json() {
        let value = serde_json::to_value(category_infos()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["category"], "current_ids");
        assert_eq!(items[0]["kind"], "vcf");
        assert_eq!(items[4]["category"], "merged_deprecated_ids");
        assert_eq!(items[4]["extension"], "txt");
    }
}
