use std::fmt;

use colored::Colorize;

use crate::workbook::Sheet;

const SAMPLE_ROWS: usize = 3;
const DATE_WORDS: [&str; 3] = ["date", "year", "month"];

/// Shape of one sheet, as printed by `analyze`
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStructure {
    pub name: String,
    pub rows: usize,
    pub columns: Vec<String>,
    /// Non-blank cells of the first rows
    pub samples: Vec<Vec<(String, String)>>,
    pub date_columns: Vec<String>,
}

pub fn analyze_sheet(sheet: &Sheet) -> SheetStructure {
    let samples = sheet
        .rows()
        .take(SAMPLE_ROWS)
        .map(|row| {
            row.iter()
                .filter_map(|(header, cell)| cell.as_text().map(|text| (header.to_string(), text)))
                .collect()
        })
        .collect();

    let date_columns = sheet
        .headers
        .iter()
        .filter(|header| is_date_like(header))
        .cloned()
        .collect();

    SheetStructure {
        name: sheet.name.clone(),
        rows: sheet.row_count(),
        columns: sheet.headers.clone(),
        samples,
        date_columns,
    }
}

fn is_date_like(header: &str) -> bool {
    let lower = header.to_lowercase();
    DATE_WORDS.iter().any(|word| lower.contains(word))
}

impl fmt::Display for SheetStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format!("Sheet '{}'", self.name).bold())?;
        writeln!(f, "{}", "-".repeat(40))?;
        writeln!(f, "  Dimensions: {} rows × {} columns", self.rows, self.columns.len())?;
        writeln!(f, "  Column names: {}", self.columns.join(", "))?;

        if !self.samples.is_empty() {
            writeln!(f, "  Sample data (first {} rows):", self.samples.len())?;
            for (idx, sample) in self.samples.iter().enumerate() {
                let cells: Vec<String> = sample.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                writeln!(f, "    Row {}: {{{}}}", idx, cells.join(", "))?;
            }
        }

        if !self.date_columns.is_empty() {
            writeln!(f, "  Date-related columns: {}", self.date_columns.join(", ").cyan())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Cell;

    #[test]
    fn test_structure_of_sheet() {
        let mut grid = vec![vec![Cell::text("Date"), Cell::text("BOD#"), Cell::text("Year Joined")]];
        for i in 0..5 {
            grid.push(vec![Cell::text("2024-01-01"), Cell::Int(i), Cell::Empty]);
        }
        let sheet = Sheet::from_grid("Champions", grid);

        let structure = analyze_sheet(&sheet);

        assert_eq!(structure.rows, 5);
        assert_eq!(structure.samples.len(), 3);
        assert_eq!(structure.samples[1].len(), 2);
        assert_eq!(structure.date_columns, vec!["Date", "Year Joined"]);
        assert!(structure.to_string().contains("5 rows × 3 columns"));
    }
}
