//! Operations command implementation.
//!
//! Responsibilities:
//! - List the operation catalog with HTTP method, URI template, and query bindings.
//! - Filter operations by a case-insensitive name fragment.
//!
//! Does NOT handle:
//! - Operation metadata itself (see `quicksight_client::OperationKind`).

use std::str::FromStr;

use anyhow::Result;
use quicksight_client::OperationKind;
use tracing::info;

use crate::formatters::{OperationRow, OutputFormat, get_formatter, output_result};

/// Build catalog rows, keeping only names that contain `filter`.
pub fn catalog(filter: Option<&str>) -> Vec<OperationRow> {
    let needle = filter.map(str::to_lowercase);
    OperationKind::ALL
        .iter()
        .filter(|kind| match &needle {
            Some(needle) => kind.name().to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .map(|kind| OperationRow {
            name: kind.name(),
            method: kind.method(),
            uri_template: kind.uri_template(),
            query: kind
                .query()
                .iter()
                .map(|(name, member)| format!("{name}={member}"))
                .collect(),
        })
        .collect()
}

pub fn run(filter: Option<&str>, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let rows = catalog(filter);
    info!(count = rows.len(), filter = ?filter, "Listing operations");

    let formatter = get_formatter(format);
    output_result(&formatter.format_operations(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_without_filter_lists_everything() {
        assert_eq!(catalog(None).len(), OperationKind::ALL.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = catalog(Some("ingestion"));
        let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["CancelIngestion", "CreateIngestion", "DescribeIngestion", "ListIngestions"]
        );
    }

    #[test]
    fn test_query_pairs_are_rendered() {
        let rows = catalog(Some("UntagResource"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].query, vec!["keys=TagKeys".to_string()]);
    }
}
