use chrono::{NaiveDate, NaiveDateTime};

/// Token that spreadsheet exports use for an empty float cell
const NAN_TOKEN: &str = "nan";

/// A typed spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Date(NaiveDateTime),
    /// Formula error kept as its literal token, e.g. `#DIV/0!`
    Error(String),
}

impl Cell {
    pub fn text(value: &str) -> Self {
        Cell::Text(value.to_string())
    }

    /// True for empty cells and for text that trims to nothing or `nan`
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Float(f) => f.is_nan(),
            Cell::Text(s) => is_blank_text(s),
            _ => false,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            Cell::Float(f) => float_to_int(*f),
            Cell::Bool(b) => Some(i64::from(*b)),
            Cell::Text(s) => parse_int(s.trim()),
            Cell::Empty | Cell::Date(_) | Cell::Error(_) => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) if f.is_finite() => Some(*f),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// Trimmed textual rendering; `None` when blank
    pub fn as_text(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        let rendered = match self {
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => render_float(*f),
            Cell::Bool(b) => if *b { "True".to_string() } else { "False".to_string() },
            Cell::Text(s) => s.trim().to_string(),
            Cell::Date(dt) => format_date(dt.date()),
            Cell::Error(token) => token.clone(),
            Cell::Empty => return None,
        };
        Some(rendered)
    }

    /// `YYYY-MM-DD`, whatever the source representation
    pub fn as_date(&self) -> Option<String> {
        match self {
            Cell::Date(dt) => Some(format_date(dt.date())),
            Cell::Text(s) => parse_date_text(s.trim()).map(format_date),
            _ => None,
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn render_float(value: f64) -> String {
    match float_to_int(value) {
        Some(i) if i as f64 == value => i.to_string(),
        _ => value.to_string(),
    }
}

fn is_blank_text(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty() || trimmed == NAN_TOKEN
}

fn float_to_int(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(date);
    }
    s.get(..10).and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
