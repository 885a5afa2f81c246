use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal conditions that end a run with a non-zero exit code
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Excel file not found: {}", .0.display())]
    WorkbookNotFound(PathBuf),

    #[error("No tournament sheets found in {}", .0.display())]
    NoTournamentSheets(PathBuf),

    #[error("Required input not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("{} is not in app format, run fix-players first", .0.display())]
    NotAppFormat(PathBuf),

    #[error("Sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },
}

/// Add context to read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read {}", path.display())
}

/// Add context to write errors
pub fn write_context(path: &Path) -> String {
    format!("Failed to write {}", path.display())
}

/// Add context to parse errors
pub fn parse_context(data_type: &str, path: &Path) -> String {
    format!("Failed to parse {} from {}", data_type, path.display())
}
