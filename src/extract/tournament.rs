use anyhow::Result;
use log::debug;

use super::fields::{date_field, extra_fields, float_field, int_field, matchup_field, text_field};
use crate::classify::TournamentSheet;
use crate::domain::TournamentResult;
use crate::errors::ArchiveError;
use crate::workbook::{Row, Sheet};

pub const PLAYER_1: &str = "Player 1";
pub const PLAYER_2: &str = "Player 2";
pub const DATE: &str = "Date";
pub const FORMAT: &str = "Format";

const RR_WIN_PCT: [&str; 2] = ["RR Win%", "RR Win %"];
const WIN_PCT: [&str; 2] = ["Win %", "Win%"];

/// Columns with a typed home in `TournamentResult`, aliases included
pub const KNOWN_COLUMNS: &[&str] = &[
    DATE, FORMAT, PLAYER_1, PLAYER_2,
    "Teams (Round Robin)", "Teams (Summary)", "Teams (Bracket)",
    "Division", "Division.1",
    "Round-1", "Round-2", "Round-3",
    "RR Won", "RR Lost", "RR Played", "RR Win%", "RR Win %", "RR Rank",
    "Seed", "Seed.1",
    "R16 Matchup", "Bracket Matchup", "R16 Match ID",
    "R16 Won", "R16 Lost", "QF Won", "QF Lost", "SF Won", "SF Lost", "Finals Won", "Finals Lost",
    "Bracket Won", "Bracket Lost", "Bracket Played",
    "Total Won", "Total Lost", "Total Played", "Win %", "Win%",
    "Final Rank", "BOD Finish",
    "Home", "Location", "Notes",
];

/// Where date/format come from and whether unknown columns survive
struct RowContext<'a> {
    date: Option<String>,
    format: Option<&'a str>,
    keep_extra: bool,
}

/// Team entries of one tournament sheet; date and format come from the sheet name
pub fn extract_tournament_sheet(sheet: &Sheet, tournament: &TournamentSheet) -> Result<Vec<TournamentResult>> {
    let context = RowContext {
        date: Some(tournament.date_string()),
        format: Some(&tournament.format),
        keep_extra: false,
    };
    extract_rows(sheet, &context)
}

/// Rows of the All Scores sheet; date and format come from each row
pub fn extract_score_rows(sheet: &Sheet) -> Result<Vec<TournamentResult>> {
    let context = RowContext {
        date: None,
        format: None,
        keep_extra: true,
    };
    extract_rows(sheet, &context)
}

fn extract_rows(sheet: &Sheet, context: &RowContext) -> Result<Vec<TournamentResult>> {
    require_player_columns(sheet)?;

    let mut results = Vec::new();
    let mut dropped = 0;

    for row in sheet.rows() {
        match build_result(&row, context) {
            Some(result) => results.push(result),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("Sheet '{}': dropped {} rows without two players", sheet.name, dropped);
    }
    Ok(results)
}

fn require_player_columns(sheet: &Sheet) -> Result<(), ArchiveError> {
    for column in [PLAYER_1, PLAYER_2] {
        if !sheet.has_column(column) {
            return Err(ArchiveError::MissingColumn {
                sheet: sheet.name.clone(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn build_result(row: &Row, context: &RowContext) -> Option<TournamentResult> {
    let player_1 = text_field(row, PLAYER_1)?;
    let player_2 = text_field(row, PLAYER_2)?;

    let mut result = TournamentResult::new(player_1, player_2);
    result.date = context.date.clone().or_else(|| date_field(row, DATE));
    result.format = context
        .format
        .map(str::to_string)
        .or_else(|| text_field(row, FORMAT));

    fill_teams(&mut result, row);
    fill_round_robin(&mut result, row);
    fill_bracket(&mut result, row);
    fill_totals(&mut result, row);

    if context.keep_extra {
        result.extra = extra_fields(row, KNOWN_COLUMNS);
    }
    Some(result)
}

fn fill_teams(result: &mut TournamentResult, row: &Row) {
    result.teams_round_robin = text_field(row, "Teams (Round Robin)");
    result.teams_summary = text_field(row, "Teams (Summary)");
    result.teams_bracket = text_field(row, "Teams (Bracket)");
    result.division = text_field(row, "Division");
    result.bracket_division = text_field(row, "Division.1");
    result.home = text_field(row, "Home");
    result.location = text_field(row, "Location");
    result.notes = text_field(row, "Notes");
}

fn fill_round_robin(result: &mut TournamentResult, row: &Row) {
    result.round_1 = int_field(row, "Round-1");
    result.round_2 = int_field(row, "Round-2");
    result.round_3 = int_field(row, "Round-3");
    result.rr_won = int_field(row, "RR Won");
    result.rr_lost = int_field(row, "RR Lost");
    result.rr_played = int_field(row, "RR Played");
    result.rr_win_pct = float_field(row, &RR_WIN_PCT);
    result.rr_rank = float_field(row, &["RR Rank"]);
    result.seed = int_field(row, "Seed");
    result.bracket_seed = int_field(row, "Seed.1");
}

fn fill_bracket(result: &mut TournamentResult, row: &Row) {
    result.r16_matchup = matchup_field(row, "R16 Matchup");
    result.bracket_matchup = matchup_field(row, "Bracket Matchup");
    result.r16_match_id = matchup_field(row, "R16 Match ID");

    result.r16_won = int_field(row, "R16 Won");
    result.r16_lost = int_field(row, "R16 Lost");
    result.qf_won = int_field(row, "QF Won");
    result.qf_lost = int_field(row, "QF Lost");
    result.sf_won = int_field(row, "SF Won");
    result.sf_lost = int_field(row, "SF Lost");
    result.finals_won = int_field(row, "Finals Won");
    result.finals_lost = int_field(row, "Finals Lost");

    result.bracket_won = int_field(row, "Bracket Won");
    result.bracket_lost = int_field(row, "Bracket Lost");
    result.bracket_played = int_field(row, "Bracket Played");
}

fn fill_totals(result: &mut TournamentResult, row: &Row) {
    result.total_won = int_field(row, "Total Won");
    result.total_lost = int_field(row, "Total Lost");
    result.total_played = int_field(row, "Total Played");
    result.win_pct = float_field(row, &WIN_PCT);
    result.final_rank = int_field(row, "Final Rank");
    result.bod_finish = int_field(row, "BOD Finish");
}
