use log::debug;

use crate::domain::{ExtraFields, FieldValue, Matchup};
use crate::workbook::{Cell, Row};

/// Integer column; omitted when empty or unparseable (never defaulted to 0)
pub fn int_field(row: &Row, column: &str) -> Option<i64> {
    let cell = row.value(column)?;
    let value = cell.as_int();
    if value.is_none() {
        debug!("Skipping unparseable integer in '{}': {:?}", column, cell);
    }
    value
}

/// Float column under whichever header spelling holds a value first
pub fn float_field(row: &Row, aliases: &[&str]) -> Option<f64> {
    let cell = row.value_of_any(aliases)?;
    let value = cell.as_float();
    if value.is_none() {
        debug!("Skipping unparseable number in {:?}: {:?}", aliases, cell);
    }
    value
}

/// Trimmed text; omitted when empty or `nan`
pub fn text_field(row: &Row, column: &str) -> Option<String> {
    row.value(column).and_then(Cell::as_text)
}

pub fn date_field(row: &Row, column: &str) -> Option<String> {
    row.value(column)
        .and_then(|cell| cell.as_date().or_else(|| cell.as_text()))
}

/// Matchup columns keep labels as text and match numbers as integers
pub fn matchup_field(row: &Row, column: &str) -> Option<Matchup> {
    match row.value(column)? {
        Cell::Text(s) => Some(Matchup::Label(s.trim().to_string())),
        cell => cell.as_int().map(Matchup::Number),
    }
}

/// Generic value for columns outside the typed vocabulary
pub fn generic_value(cell: &Cell) -> Option<FieldValue> {
    if cell.is_blank() {
        return None;
    }
    let value = match cell {
        Cell::Int(i) => FieldValue::Int(*i),
        Cell::Float(f) if f.fract() == 0.0 => cell.as_int().map_or(FieldValue::Float(*f), FieldValue::Int),
        Cell::Float(f) => FieldValue::Float(*f),
        Cell::Bool(b) => FieldValue::Bool(*b),
        Cell::Date(_) => FieldValue::Text(cell.as_date()?),
        Cell::Text(_) | Cell::Error(_) => FieldValue::Text(cell.as_text()?),
        Cell::Empty => return None,
    };
    Some(value)
}

/// Every non-blank column not listed in `known`
pub fn extra_fields(row: &Row, known: &[&str]) -> ExtraFields {
    row.iter()
        .filter(|(header, _)| !known.contains(header))
        .filter_map(|(header, cell)| generic_value(cell).map(|v| (header.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Sheet;

    fn sheet(headers: &[&str], cells: Vec<Cell>) -> Sheet {
        let header_row = headers.iter().map(|h| Cell::text(h)).collect();
        Sheet::from_grid("test", vec![header_row, cells])
    }

    #[test]
    fn test_int_field_omits_instead_of_zeroing() {
        let sheet = sheet(
            &["Round-1", "Round-2", "Round-3"],
            vec![Cell::Float(11.0), Cell::text("n/a"), Cell::Empty],
        );
        let row = sheet.rows().next().unwrap();

        assert_eq!(int_field(&row, "Round-1"), Some(11));
        assert_eq!(int_field(&row, "Round-2"), None);
        assert_eq!(int_field(&row, "Round-3"), None);
        assert_eq!(int_field(&row, "Round-4"), None);
    }

    #[test]
    fn test_float_aliases_first_match_wins() {
        let sheet = sheet(&["RR Win %", "RR Win%"], vec![Cell::Float(0.25), Cell::Float(0.5)]);
        let row = sheet.rows().next().unwrap();

        assert_eq!(float_field(&row, &["RR Win%", "RR Win %"]), Some(0.5));
        assert_eq!(float_field(&row, &["RR Win %", "RR Win%"]), Some(0.25));
    }

    #[test]
    fn test_matchup_values() {
        let sheet = sheet(
            &["R16 Matchup", "R16 Match ID"],
            vec![Cell::text(" vs Smith/Jones "), Cell::Float(7.0)],
        );
        let row = sheet.rows().next().unwrap();

        assert_eq!(
            matchup_field(&row, "R16 Matchup"),
            Some(Matchup::Label("vs Smith/Jones".into()))
        );
        assert_eq!(matchup_field(&row, "R16 Match ID"), Some(Matchup::Number(7)));
    }

    #[test]
    fn test_generic_values() {
        assert_eq!(generic_value(&Cell::Float(4.0)), Some(FieldValue::Int(4)));
        assert_eq!(generic_value(&Cell::Float(0.5)), Some(FieldValue::Float(0.5)));
        assert_eq!(generic_value(&Cell::Float(1e20)), Some(FieldValue::Float(1e20)));
        assert_eq!(
            generic_value(&Cell::Error("#DIV/0!".into())),
            Some(FieldValue::Text("#DIV/0!".into()))
        );
        assert_eq!(generic_value(&Cell::text("nan")), None);
    }
}
