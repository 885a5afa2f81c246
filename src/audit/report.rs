use std::collections::BTreeSet;
use std::fmt;

use colored::Colorize;

use super::columns::ColumnDiff;
use super::dates::DateDiff;

const RULE_WIDTH: usize = 60;

/// Outcome of comparing one aggregate sheet with its JSON file
#[derive(Debug, Clone, PartialEq)]
pub enum PairStatus {
    Compared(ColumnDiff),
    MissingSheet,
    MissingJson,
    /// The sheet exists but could not be read
    UnreadableSheet(String),
    /// The file exists but is not a list of JSON records
    UnreadableJson(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub sheet: String,
    pub file: String,
    pub status: PairStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChampionshipMismatch {
    pub name: String,
    pub recorded: i64,
    pub computed: u32,
}

/// Read-only reconciliation result between a workbook and its JSON export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    pub pairs: Vec<PairReport>,
    pub score_dates: Option<DateDiff>,
    pub tournament_files: usize,
    /// Champions sheet dates without a tournament file
    pub champion_dates_without_file: BTreeSet<String>,
    /// Tournament sheets without a tournament file for their date
    pub sheets_without_file: Vec<String>,
    /// `None` when All Players.json is not in app format or a file is missing
    pub championship_mismatches: Option<Vec<ChampionshipMismatch>>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        let pairs_clean = self
            .pairs
            .iter()
            .all(|pair| matches!(&pair.status, PairStatus::Compared(diff) if diff.is_clean()));
        let dates_clean = self
            .score_dates
            .as_ref()
            .is_none_or(|diff| diff.excel_only.is_empty() && diff.json_only.is_empty());
        let champions_clean = self
            .championship_mismatches
            .as_ref()
            .is_none_or(Vec::is_empty);

        pairs_clean
            && dates_clean
            && champions_clean
            && self.champion_dates_without_file.is_empty()
            && self.sheets_without_file.is_empty()
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, "{}", title.bold())?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items.into_iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            heading(f, &format!("{} sheet vs {}", pair.sheet, pair.file))?;
            match &pair.status {
                PairStatus::MissingSheet => writeln!(f, "{}", "Sheet not found in workbook".yellow())?,
                PairStatus::MissingJson => writeln!(f, "{}", format!("{} not found", pair.file).yellow())?,
                PairStatus::UnreadableSheet(reason) => {
                    writeln!(f, "{} {}", "Sheet could not be read:".red(), reason)?
                }
                PairStatus::UnreadableJson(reason) => {
                    writeln!(f, "{} {}", format!("{} could not be read:", pair.file).red(), reason)?
                }
                PairStatus::Compared(diff) if diff.is_clean() => {
                    writeln!(f, "{}", "Columns match".green())?
                }
                PairStatus::Compared(diff) => {
                    if !diff.excel_only.is_empty() {
                        writeln!(f, "{} {}", "In Excel but NOT in JSON:".red(), join(&diff.excel_only))?;
                    }
                    if !diff.json_only.is_empty() {
                        writeln!(f, "{} {}", "In JSON but NOT in Excel:".yellow(), join(&diff.json_only))?;
                    }
                }
            }
        }

        if let Some(dates) = &self.score_dates {
            heading(f, "All Scores date comparison")?;
            writeln!(f, "Unique dates: Excel {}, JSON {}", dates.excel_dates, dates.json_dates)?;
            writeln!(f, "Dates in Excel only: {}", none_or(&dates.excel_only))?;
            writeln!(f, "Dates in JSON only: {}", none_or(&dates.json_only))?;
        }

        heading(f, "Tournament JSON files")?;
        writeln!(f, "Tournament files: {}", self.tournament_files)?;
        writeln!(
            f,
            "Tournaments in Champions sheet without JSON file: {}",
            self.champion_dates_without_file.len()
        )?;
        if !self.champion_dates_without_file.is_empty() {
            writeln!(f, "  Missing: {}", join(&self.champion_dates_without_file).red())?;
        }
        writeln!(f, "Tournament sheets without JSON file: {}", self.sheets_without_file.len())?;
        if !self.sheets_without_file.is_empty() {
            writeln!(f, "  Missing: {}", join(&self.sheets_without_file).red())?;
        }

        if let Some(mismatches) = &self.championship_mismatches {
            heading(f, "Championship reconciliation")?;
            if mismatches.is_empty() {
                writeln!(f, "{}", "All championship counts match All Scores".green())?;
            }
            for m in mismatches {
                writeln!(
                    f,
                    "  {}: recorded {}, computed {}",
                    m.name.red(),
                    m.recorded,
                    m.computed
                )?;
            }
        }

        writeln!(f)?;
        if self.is_clean() {
            writeln!(f, "{}", "No discrepancies found".green().bold())
        } else {
            writeln!(f, "{}", "Discrepancies found".yellow().bold())
        }
    }
}

fn none_or(dates: &BTreeSet<String>) -> String {
    if dates.is_empty() {
        "None".to_string()
    } else {
        join(dates)
    }
}
