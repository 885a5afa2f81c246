use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info, warn};
use regex::Regex;

use crate::config::normalize_format;
use crate::config::sheets::{ALL_PLAYERS_SHEET, ALL_SCORES_SHEET, CHAMPIONS_SHEET};
use crate::workbook::format_date;

/// A per-tournament results sheet, e.g. `2025-08-02 W`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSheet {
    pub name: String,
    pub date: NaiveDate,
    pub format: String,
}

impl TournamentSheet {
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetKind {
    Tournament(TournamentSheet),
    Champions,
    AllScores,
    AllPlayers,
    Unknown,
}

/// Classified sheet names of one workbook
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkbookLayout {
    /// Most recent first
    pub tournaments: Vec<TournamentSheet>,
    pub champions: Option<String>,
    pub all_scores: Option<String>,
    pub all_players: Option<String>,
    pub ignored: Vec<String>,
}

/// Classifies sheets purely by name
pub struct SheetClassifier {
    tournament_regex: Regex,
}

impl SheetClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tournament_regex: Self::compile_regex()?,
        })
    }

    fn compile_regex() -> Result<Regex> {
        Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+([A-Za-z].*)$")
            .context("Failed to compile tournament sheet regex")
    }

    pub fn classify(&self, sheet_name: &str) -> SheetKind {
        match sheet_name {
            CHAMPIONS_SHEET => SheetKind::Champions,
            ALL_SCORES_SHEET => SheetKind::AllScores,
            ALL_PLAYERS_SHEET => SheetKind::AllPlayers,
            _ => self
                .parse_tournament(sheet_name)
                .map(SheetKind::Tournament)
                .unwrap_or(SheetKind::Unknown),
        }
    }

    fn parse_tournament(&self, sheet_name: &str) -> Option<TournamentSheet> {
        let captures = self.tournament_regex.captures(sheet_name)?;
        let date_str = captures.get(1)?.as_str();
        let format_token = captures.get(2)?.as_str().trim();

        let date = match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                warn!("Sheet '{}' looks like a tournament but has a bad date: {}", sheet_name, e);
                return None;
            }
        };

        Some(TournamentSheet {
            name: sheet_name.to_string(),
            date,
            format: normalize_format(format_token),
        })
    }

    pub fn classify_all(&self, sheet_names: &[String]) -> WorkbookLayout {
        let mut layout = WorkbookLayout::default();

        for name in sheet_names {
            match self.classify(name) {
                SheetKind::Tournament(sheet) => layout.tournaments.push(sheet),
                SheetKind::Champions => layout.champions = Some(name.clone()),
                SheetKind::AllScores => layout.all_scores = Some(name.clone()),
                SheetKind::AllPlayers => layout.all_players = Some(name.clone()),
                SheetKind::Unknown => {
                    debug!("Ignoring sheet '{}'", name);
                    layout.ignored.push(name.clone());
                }
            }
        }

        sort_most_recent_first(&mut layout.tournaments);
        info!(
            "Found {} tournament sheets ({} ignored)",
            layout.tournaments.len(),
            layout.ignored.len()
        );
        layout
    }
}

fn sort_most_recent_first(sheets: &mut [TournamentSheet]) {
    sheets.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.name.cmp(&a.name)));
}
