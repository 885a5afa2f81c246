use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// Column names found on only one side of a sheet/JSON pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDiff {
    pub excel_only: BTreeSet<String>,
    pub json_only: BTreeSet<String>,
}

impl ColumnDiff {
    pub fn is_clean(&self) -> bool {
        self.excel_only.is_empty() && self.json_only.is_empty()
    }
}

/// Compare sheet headers against the keys of the first JSON record.
///
/// Records are not schema-uniform, so the first one only approximates the
/// key set of the whole file.
pub fn compare_columns(excel_headers: &[String], json_records: &[Map<String, Value>]) -> ColumnDiff {
    let excel: BTreeSet<&str> = excel_headers.iter().map(String::as_str).collect();
    let json: BTreeSet<&str> = json_records
        .first()
        .map(|record| record.keys().map(String::as_str).collect())
        .unwrap_or_default();

    ColumnDiff {
        excel_only: excel.difference(&json).map(|s| s.to_string()).collect(),
        json_only: json.difference(&excel).map(|s| s.to_string()).collect(),
    }
}
