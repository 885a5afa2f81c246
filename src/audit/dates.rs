use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::extract::tournament::DATE;
use crate::workbook::Sheet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateDiff {
    pub excel_dates: usize,
    pub json_dates: usize,
    pub excel_only: BTreeSet<String>,
    pub json_only: BTreeSet<String>,
}

/// Distinct `YYYY-MM-DD` values of the sheet's `Date` column
pub fn sheet_dates(sheet: &Sheet) -> BTreeSet<String> {
    sheet
        .rows()
        .filter_map(|row| row.value(DATE))
        .filter_map(|cell| {
            cell.as_date()
                .or_else(|| cell.as_text().map(|text| text.chars().take(10).collect()))
        })
        .collect()
}

/// Distinct `Date` strings across the records
pub fn json_dates(records: &[Map<String, Value>]) -> BTreeSet<String> {
    records
        .iter()
        .filter_map(|record| record.get(DATE).and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

pub fn compare_dates(excel: &BTreeSet<String>, json: &BTreeSet<String>) -> DateDiff {
    DateDiff {
        excel_dates: excel.len(),
        json_dates: json.len(),
        excel_only: excel.difference(json).cloned().collect(),
        json_only: json.difference(excel).cloned().collect(),
    }
}

/// Date prefix of a tournament file name, e.g. `2024-01-01` for `2024-01-01 M.json`
pub fn file_date(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
    stem.split(' ').next().filter(|part| part.contains('-'))
}

pub fn file_dates(file_names: &[String]) -> BTreeSet<&str> {
    file_names.iter().filter_map(|name| file_date(name)).collect()
}

/// Dates with no tournament file carrying the same date prefix
pub fn dates_without_file(dates: &BTreeSet<String>, file_names: &[String]) -> BTreeSet<String> {
    let covered = file_dates(file_names);

    dates
        .iter()
        .filter(|date| !covered.contains(date.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Cell;
    use chrono::NaiveDate;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sheet_dates_normalised() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let sheet = Sheet::from_grid(
            "All Scores",
            vec![
                vec![Cell::text("Date"), Cell::text("Player 1")],
                vec![Cell::Date(date), Cell::text("A")],
                vec![Cell::text("2024-02-03 00:00:00"), Cell::text("B")],
                vec![Cell::Empty, Cell::text("C")],
            ],
        );

        assert_eq!(sheet_dates(&sheet), set(&["2024-01-01", "2024-02-03"]));
    }

    #[test]
    fn test_date_differences() {
        let diff = compare_dates(&set(&["2024-01-01", "2024-02-01"]), &set(&["2024-02-01", "2024-03-01"]));

        assert_eq!(diff.excel_only, set(&["2024-01-01"]));
        assert_eq!(diff.json_only, set(&["2024-03-01"]));
        assert_eq!(diff.excel_dates, 2);
    }

    #[test]
    fn test_file_date_matching() {
        assert_eq!(file_date("2024-01-01 M.json"), Some("2024-01-01"));
        assert_eq!(file_date("Champions.json"), None);

        let files = vec!["2024-01-01 M.json".to_string(), "notes.json".to_string()];
        let missing = dates_without_file(&set(&["2024-01-01", "2024-05-05"]), &files);

        assert_eq!(missing, set(&["2024-05-05"]));
    }
}
