use anyhow::Result;
use log::debug;

use super::fields::{date_field, extra_fields, generic_value, text_field};
use super::tournament::DATE;
use crate::domain::{ChampionRecord, PlayerRecord};
use crate::workbook::{Row, Sheet};

const UNIQUE_PLAYERS_MARKER: &str = "Unique Players";
const PLAYER_NAME: &str = "Player Name";

const CHAMPION_COLUMNS: &[&str] = &[DATE, "BOD#", "Format", "Champions", "Finalists", "Location", "Notes"];

const PLAYER_STAT_COLUMNS: &[&str] = &[
    "BOD's Played", "Best Result", "AVG Finish", "Games Played", "Games Won", "Winning %",
];

/// One record per tournament row that has a date
pub fn extract_champions(sheet: &Sheet) -> Result<Vec<ChampionRecord>> {
    let champions: Vec<ChampionRecord> = sheet.rows().filter_map(|row| build_champion(&row)).collect();
    debug!("Sheet '{}': {} of {} rows dated", sheet.name, champions.len(), sheet.row_count());
    Ok(champions)
}

fn build_champion(row: &Row) -> Option<ChampionRecord> {
    let date = date_field(row, DATE)?;

    Some(ChampionRecord {
        date,
        bod_number: row.value("BOD#").and_then(generic_value),
        format: text_field(row, "Format"),
        champions: text_field(row, "Champions"),
        finalists: text_field(row, "Finalists"),
        location: text_field(row, "Location"),
        notes: text_field(row, "Notes"),
        extra: extra_fields(row, CHAMPION_COLUMNS),
    })
}

/// One record per named player; the `<N> Unique Players` column becomes `Player Name`
pub fn extract_all_players(sheet: &Sheet) -> Result<Vec<PlayerRecord>> {
    let name_columns = player_name_columns(sheet);
    if name_columns.is_empty() {
        debug!("Sheet '{}' has no player name column", sheet.name);
    }

    let mut known: Vec<&str> = name_columns.clone();
    known.extend_from_slice(PLAYER_STAT_COLUMNS);

    let players = sheet
        .rows()
        .filter_map(|row| build_player(&row, &name_columns, &known))
        .collect();
    Ok(players)
}

fn player_name_columns(sheet: &Sheet) -> Vec<&str> {
    sheet
        .headers
        .iter()
        .map(String::as_str)
        .filter(|h| h.contains(UNIQUE_PLAYERS_MARKER) || *h == PLAYER_NAME)
        .collect()
}

fn build_player(row: &Row, name_columns: &[&str], known: &[&str]) -> Option<PlayerRecord> {
    let player_name = name_columns
        .iter()
        .find_map(|column| text_field(row, column))?;

    let stat = |column: &str| row.value(column).and_then(generic_value);

    Some(PlayerRecord {
        player_name,
        bods_played: stat("BOD's Played"),
        best_result: stat("Best Result"),
        avg_finish: stat("AVG Finish"),
        games_played: stat("Games Played"),
        games_won: stat("Games Won"),
        winning_pct: stat("Winning %"),
        extra: extra_fields(row, known),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;
    use crate::workbook::Cell;

    fn header(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::text(v)).collect()
    }

    #[test]
    fn test_champions_require_a_date() {
        let sheet = Sheet::from_grid(
            "Champions",
            vec![
                header(&["Date", "BOD#", "Format", "Champions", "W", "W"]),
                vec![
                    Cell::text("2024-08-31 00:00:00"),
                    Cell::Float(40.0),
                    Cell::text("Mixed"),
                    Cell::text("A & B"),
                    Cell::Float(20.0),
                    Cell::Float(5.0),
                ],
                vec![Cell::Empty, Cell::Float(41.0), Cell::text("Mixed")],
            ],
        );

        let champions = extract_champions(&sheet).unwrap();

        assert_eq!(champions.len(), 1);
        assert_eq!(champions[0].date, "2024-08-31");
        assert_eq!(champions[0].bod_number, Some(FieldValue::Int(40)));
        assert_eq!(champions[0].extra.get("W.1"), Some(&FieldValue::Int(5)));
    }

    #[test]
    fn test_unique_players_column_is_renamed() {
        let sheet = Sheet::from_grid(
            "All Players",
            vec![
                header(&["480 Unique Players", "BOD's Played", "AVG Finish", "Ind Champs"]),
                vec![Cell::text(" Smith "), Cell::Float(12.0), Cell::Error("#DIV/0!".into()), Cell::Int(2)],
                vec![Cell::Empty, Cell::Float(3.0)],
            ],
        );

        let players = extract_all_players(&sheet).unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].player_name, "Smith");
        assert_eq!(players[0].bods_played, Some(FieldValue::Int(12)));
        assert_eq!(players[0].avg_finish, Some(FieldValue::Text("#DIV/0!".into())));
        assert_eq!(players[0].extra.get("Ind Champs"), Some(&FieldValue::Int(2)));
        assert!(!players[0].extra.contains_key("480 Unique Players"));

        let json = serde_json::to_value(&players[0]).unwrap();
        assert_eq!(json["Player Name"], "Smith");
    }
}
