use std::collections::HashSet;

use super::cell::Cell;

static EMPTY: Cell = Cell::Empty;

/// One sheet: header row plus data rows, blank rows removed
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Build from a raw grid; the first non-blank row becomes the header.
    pub fn from_grid(name: impl Into<String>, grid: Vec<Vec<Cell>>) -> Self {
        let mut grid = grid.into_iter().skip_while(|row| is_blank_row(row));

        let headers = grid
            .next()
            .map(|row| build_headers(&row))
            .unwrap_or_default();

        let rows = grid.filter(|row| !is_blank_row(row)).collect();

        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn has_column(&self, header: &str) -> bool {
        self.column_index(header).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }
}

/// Borrowed view of one data row, addressed by header name
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// Cell under `header`; `None` only when the column does not exist
    pub fn get(&self, header: &str) -> Option<&'a Cell> {
        let idx = self.headers.iter().position(|h| h == header)?;
        Some(self.cells.get(idx).unwrap_or(&EMPTY))
    }

    /// Non-blank cell under `header`
    pub fn value(&self, header: &str) -> Option<&'a Cell> {
        self.get(header).filter(|cell| !cell.is_blank())
    }

    /// First alias that holds a value
    pub fn value_of_any(&self, aliases: &[&str]) -> Option<&'a Cell> {
        aliases.iter().find_map(|alias| self.value(alias))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Cell)> + '_ {
        let cells = self.cells;
        self.headers
            .iter()
            .enumerate()
            .map(move |(idx, header)| (header.as_str(), cells.get(idx).unwrap_or(&EMPTY)))
    }
}

fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_blank)
}

fn build_headers(row: &[Cell]) -> Vec<String> {
    let raw = row
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();
    dedupe_headers(raw)
}

fn header_name(idx: usize, cell: &Cell) -> String {
    cell.as_text()
        .unwrap_or_else(|| format!("Unnamed: {}", idx))
}

/// Repeated headers become `X`, `X.1`, `X.2`, ...
fn dedupe_headers(raw: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(raw.len());

    for name in raw {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while used.contains(&candidate) {
            candidate = format!("{}.{}", name, suffix);
            suffix += 1;
        }
        used.insert(candidate.clone());
        headers.push(candidate);
    }

    headers
}
