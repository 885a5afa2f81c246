//! Read-only reconciliation of a workbook against its JSON export.

mod columns;
mod dates;
mod report;
mod structure;

use anyhow::Result;
use log::{info, warn};
use serde_json::{Map, Value};

use crate::aggregate::{build_championships, ChampionshipCounts};
use crate::classify::{SheetClassifier, WorkbookLayout};
use crate::config::sheets::{
    ALL_PLAYERS_FILE, ALL_PLAYERS_SHEET, ALL_SCORES_FILE, ALL_SCORES_SHEET, CHAMPIONS_FILE,
    CHAMPIONS_SHEET,
};
use crate::store::JsonStore;
use crate::workbook::{Sheet, SheetSource};

pub use columns::{compare_columns, ColumnDiff};
pub use dates::{compare_dates, dates_without_file, file_date, file_dates, json_dates, sheet_dates, DateDiff};
pub use report::{AuditReport, ChampionshipMismatch, PairReport, PairStatus};
pub use structure::{analyze_sheet, SheetStructure};

type Records = Vec<Map<String, Value>>;

const PAIRS: [(&str, &str); 3] = [
    (CHAMPIONS_SHEET, CHAMPIONS_FILE),
    (ALL_SCORES_SHEET, ALL_SCORES_FILE),
    (ALL_PLAYERS_SHEET, ALL_PLAYERS_FILE),
];

/// One aggregate sheet and its JSON file, whichever of the two could be read
#[derive(Default)]
struct LoadedPair {
    sheet: Option<Sheet>,
    records: Option<Records>,
    sheet_error: Option<String>,
    json_error: Option<String>,
}

pub fn audit<S: SheetSource + ?Sized>(source: &mut S, store: &JsonStore) -> Result<AuditReport> {
    let sheet_names = source.sheet_names();
    let layout = SheetClassifier::new()?.classify_all(&sheet_names);
    let mut report = AuditReport::default();

    let champions = load_pair(source, store, &sheet_names, CHAMPIONS_SHEET, CHAMPIONS_FILE);
    let scores = load_pair(source, store, &sheet_names, ALL_SCORES_SHEET, ALL_SCORES_FILE);
    let players = load_pair(source, store, &sheet_names, ALL_PLAYERS_SHEET, ALL_PLAYERS_FILE);

    for (pair, (sheet_name, file_name)) in [&champions, &scores, &players].into_iter().zip(PAIRS) {
        report.pairs.push(PairReport {
            sheet: sheet_name.to_string(),
            file: file_name.to_string(),
            status: pair_status(pair),
        });
    }

    if let (Some(sheet), Some(records)) = (&scores.sheet, &scores.records) {
        report.score_dates = Some(compare_dates(&sheet_dates(sheet), &json_dates(records)));
    }

    let tournament_files = store.tournament_files()?;
    report.tournament_files = tournament_files.len();
    if let Some(sheet) = &champions.sheet {
        report.champion_dates_without_file = dates_without_file(&sheet_dates(sheet), &tournament_files);
    }
    report.sheets_without_file = sheets_without_file(&layout, &tournament_files);

    if let (Some(score_records), Some(player_records)) = (&scores.records, &players.records) {
        let counts = build_championships(score_records);
        report.championship_mismatches = championship_mismatches(player_records, &counts);
    }

    info!("Audit finished: {} tournament files checked", report.tournament_files);
    Ok(report)
}

/// Read failures are kept on the pair and reported, never raised
fn load_pair<S: SheetSource + ?Sized>(
    source: &mut S,
    store: &JsonStore,
    sheet_names: &[String],
    sheet_name: &str,
    file_name: &str,
) -> LoadedPair {
    let mut pair = LoadedPair::default();

    if sheet_names.iter().any(|name| name == sheet_name) {
        match source.read_sheet(sheet_name) {
            Ok(sheet) => pair.sheet = Some(sheet),
            Err(e) => {
                warn!("Error reading sheet '{}': {:#}", sheet_name, e);
                pair.sheet_error = Some(format!("{e:#}"));
            }
        }
    } else {
        warn!("Sheet '{}' not found in workbook", sheet_name);
    }

    match store.load::<Records>(file_name) {
        Ok(Some(records)) => pair.records = Some(records),
        Ok(None) => warn!("{} not found in {}", file_name, store.dir().display()),
        Err(e) => {
            warn!("Error reading {}: {:#}", file_name, e);
            pair.json_error = Some(format!("{e:#}"));
        }
    }

    pair
}

fn pair_status(pair: &LoadedPair) -> PairStatus {
    if let Some(reason) = &pair.sheet_error {
        return PairStatus::UnreadableSheet(reason.clone());
    }
    if let Some(reason) = &pair.json_error {
        return PairStatus::UnreadableJson(reason.clone());
    }
    match (&pair.sheet, &pair.records) {
        (None, _) => PairStatus::MissingSheet,
        (_, None) => PairStatus::MissingJson,
        (Some(sheet), Some(records)) => PairStatus::Compared(compare_columns(&sheet.headers, records)),
    }
}

fn sheets_without_file(layout: &WorkbookLayout, tournament_files: &[String]) -> Vec<String> {
    let covered = file_dates(tournament_files);
    layout
        .tournaments
        .iter()
        .filter(|sheet| !covered.contains(sheet.date_string().as_str()))
        .map(|sheet| sheet.name.clone())
        .collect()
}

/// Players whose stored total differs from the recomputed count.
///
/// `None` unless the players are in app format.
pub fn championship_mismatches(
    players: &[Map<String, Value>],
    counts: &ChampionshipCounts,
) -> Option<Vec<ChampionshipMismatch>> {
    const TOTAL: &str = "totalChampionships";

    if !players.first()?.contains_key(TOTAL) {
        return None;
    }

    let mismatches = players
        .iter()
        .filter_map(|player| {
            let name = player.get("name").and_then(Value::as_str)?;
            let recorded = player.get(TOTAL).and_then(Value::as_i64).unwrap_or(0);
            let computed = counts.get(name).copied().unwrap_or(0);
            (recorded != i64::from(computed)).then(|| ChampionshipMismatch {
                name: name.to_string(),
                recorded,
                computed,
            })
        })
        .collect();

    Some(mismatches)
}
