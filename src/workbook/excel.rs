use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use chrono::NaiveDateTime;
use log::{debug, info};

use super::cell::Cell;
use super::sheet::Sheet;
use super::SheetSource;
use crate::errors::{read_context, ArchiveError};

/// Workbook on disk (`.xlsx`, `.xls`, `.ods`), read sheet by sheet
pub struct ExcelWorkbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(ArchiveError::WorkbookNotFound(path).into());
        }

        info!("Loading Excel file: {}", path.display());
        let sheets = open_workbook_auto(&path).with_context(|| read_context(&path))?;

        Ok(Self { path, sheets })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for ExcelWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<Sheet> {
        let range = self
            .sheets
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet '{}'", name))?;

        let grid: Vec<Vec<Cell>> = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        debug!("Sheet '{}': {} raw rows", name, grid.len());
        Ok(Sheet::from_grid(name, grid))
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) if dt.is_duration() => Cell::Float(dt.as_f64()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(Cell::Date)
            .unwrap_or(Cell::Float(dt.as_f64())),
        Data::DateTimeIso(s) => parse_iso(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_workbook_is_reported() {
        let missing = std::env::temp_dir().join("bod_archive_no_such_workbook.xlsx");
        let err = ExcelWorkbook::open(&missing).err().unwrap();

        assert!(matches!(
            err.downcast_ref::<ArchiveError>(),
            Some(ArchiveError::WorkbookNotFound(_))
        ));
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(convert_cell(&Data::Float(2.0)), Cell::Float(2.0));
        assert_eq!(convert_cell(&Data::String("A".into())), Cell::text("A"));
        assert_eq!(
            convert_cell(&Data::Error(calamine::CellErrorType::Div0)),
            Cell::Error("#DIV/0!".into())
        );
        assert!(matches!(
            convert_cell(&Data::DateTimeIso("2024-01-01T00:00:00".into())),
            Cell::Date(_)
        ));
    }
}
