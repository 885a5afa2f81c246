use anyhow::Result;
use log::{info, warn};

use crate::audit::{self, analyze_sheet, AuditReport, SheetStructure};
use crate::config::settings::AppConfig;
use crate::store::JsonStore;
use crate::workbook::{ExcelWorkbook, SheetSource};

/// Prints the reconciliation report of a workbook against its JSON export
pub struct AuditService {
    config: AppConfig,
}

impl AuditService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<AuditReport> {
        let mut workbook = ExcelWorkbook::open(&self.config.paths.workbook)?;
        let report = self.audit_from(&mut workbook)?;
        println!("{report}");
        Ok(report)
    }

    pub fn audit_from<S: SheetSource + ?Sized>(&self, source: &mut S) -> Result<AuditReport> {
        info!("=== Excel Data Audit ===");
        info!("Excel file: {}", self.config.paths.workbook.display());
        info!("JSON directory: {}", self.config.paths.output_dir.display());

        let store = JsonStore::existing(&self.config.paths.output_dir);
        audit::audit(source, &store)
    }
}

/// Prints the structure of every sheet of a workbook
pub struct AnalysisService {
    config: AppConfig,
}

impl AnalysisService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<Vec<SheetStructure>> {
        let mut workbook = ExcelWorkbook::open(&self.config.paths.workbook)?;
        println!("Analyzing Excel file: {}", workbook.path().display());

        let structures = self.analyze_from(&mut workbook);
        println!("Total sheets found: {}\n", structures.len());
        for structure in &structures {
            println!("{structure}");
        }
        Ok(structures)
    }

    /// Sheets that fail to read are logged and left out
    pub fn analyze_from<S: SheetSource + ?Sized>(&self, source: &mut S) -> Vec<SheetStructure> {
        let mut structures = Vec::new();
        for name in source.sheet_names() {
            match source.read_sheet(&name) {
                Ok(sheet) => structures.push(analyze_sheet(&sheet)),
                Err(e) => warn!("Error reading sheet '{}': {:#}", name, e),
            }
        }
        structures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::{Cell, MemoryWorkbook, Sheet};

    #[test]
    fn test_analyze_every_sheet() {
        let mut workbook = MemoryWorkbook::new()
            .with_sheet(Sheet::from_grid("Champions", vec![vec![Cell::text("Date")]]))
            .with_sheet(Sheet::from_grid(
                "2024-01-01 M",
                vec![
                    vec![Cell::text("Player 1"), Cell::text("Player 2")],
                    vec![Cell::text("A"), Cell::text("B")],
                ],
            ));

        let structures = AnalysisService::new(AppConfig::default()).analyze_from(&mut workbook);

        assert_eq!(structures.len(), 2);
        assert_eq!(structures[0].date_columns, vec!["Date"]);
        assert_eq!(structures[1].rows, 1);
    }
}
