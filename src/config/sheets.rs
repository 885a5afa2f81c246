/// Fixed sheet vocabulary of the BOD Scores History workbook
///
/// Tournament sheets are named `YYYY-MM-DD <Format>` (e.g. `2025-08-02 W`).
/// Everything else is either one of the aggregate sheets below or ignored.
pub const CHAMPIONS_SHEET: &str = "Champions";
pub const ALL_SCORES_SHEET: &str = "All Scores";
pub const ALL_PLAYERS_SHEET: &str = "All Players";

pub const CHAMPIONS_FILE: &str = "Champions.json";
pub const ALL_SCORES_FILE: &str = "All Scores.json";
pub const ALL_PLAYERS_FILE: &str = "All Players.json";

pub const AGGREGATE_FILES: [&str; 3] = [CHAMPIONS_FILE, ALL_SCORES_FILE, ALL_PLAYERS_FILE];

#[derive(Debug, Clone)]
pub struct FormatAlias {
    pub token: &'static str,
    pub name: &'static str,
}

impl FormatAlias {
    pub const fn new(token: &'static str, name: &'static str) -> Self {
        Self { token, name }
    }
}

/// Sheet-name format tokens and the display name they stand for
pub const FORMAT_ALIASES: [FormatAlias; 5] = [
    FormatAlias::new("M", "Men's"),
    FormatAlias::new("W", "Women's"),
    FormatAlias::new("Mixed", "Mixed"),
    FormatAlias::new("Men", "Men's"),
    FormatAlias::new("Women", "Women's"),
];

/// Unknown tokens pass through verbatim.
pub fn normalize_format(token: &str) -> String {
    FORMAT_ALIASES
        .iter()
        .find(|alias| alias.token == token)
        .map(|alias| alias.name.to_string())
        .unwrap_or_else(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        assert_eq!(normalize_format("W"), "Women's");
        assert_eq!(normalize_format("M"), "Men's");
        assert_eq!(normalize_format("Mixed"), "Mixed");
        assert_eq!(normalize_format("Coed"), "Coed");
    }
}
