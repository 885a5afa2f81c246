use serde::{Deserialize, Serialize};

use super::value::{ExtraFields, FieldValue, Matchup};

/// One team entry in one tournament (a row of a tournament sheet or of All Scores)
///
/// Every optional field is omitted from the JSON when the sheet had no data
/// for it; a present `0` means the sheet really recorded zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    #[serde(rename = "Date", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "Player 1")]
    pub player_1: String,
    #[serde(rename = "Player 2")]
    pub player_2: String,

    #[serde(rename = "Teams (Round Robin)", skip_serializing_if = "Option::is_none")]
    pub teams_round_robin: Option<String>,
    #[serde(rename = "Teams (Summary)", skip_serializing_if = "Option::is_none")]
    pub teams_summary: Option<String>,
    #[serde(rename = "Teams (Bracket)", skip_serializing_if = "Option::is_none")]
    pub teams_bracket: Option<String>,
    #[serde(rename = "Division", skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(rename = "Division.1", skip_serializing_if = "Option::is_none")]
    pub bracket_division: Option<String>,

    #[serde(rename = "Round-1", skip_serializing_if = "Option::is_none")]
    pub round_1: Option<i64>,
    #[serde(rename = "Round-2", skip_serializing_if = "Option::is_none")]
    pub round_2: Option<i64>,
    #[serde(rename = "Round-3", skip_serializing_if = "Option::is_none")]
    pub round_3: Option<i64>,
    #[serde(rename = "RR Won", skip_serializing_if = "Option::is_none")]
    pub rr_won: Option<i64>,
    #[serde(rename = "RR Lost", skip_serializing_if = "Option::is_none")]
    pub rr_lost: Option<i64>,
    #[serde(rename = "RR Played", skip_serializing_if = "Option::is_none")]
    pub rr_played: Option<i64>,
    #[serde(rename = "RR Win %", skip_serializing_if = "Option::is_none")]
    pub rr_win_pct: Option<f64>,
    #[serde(rename = "RR Rank", skip_serializing_if = "Option::is_none")]
    pub rr_rank: Option<f64>,

    #[serde(rename = "Seed", skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(rename = "Seed.1", skip_serializing_if = "Option::is_none")]
    pub bracket_seed: Option<i64>,

    #[serde(rename = "R16 Matchup", skip_serializing_if = "Option::is_none")]
    pub r16_matchup: Option<Matchup>,
    #[serde(rename = "Bracket Matchup", skip_serializing_if = "Option::is_none")]
    pub bracket_matchup: Option<Matchup>,
    #[serde(rename = "R16 Match ID", skip_serializing_if = "Option::is_none")]
    pub r16_match_id: Option<Matchup>,

    #[serde(rename = "R16 Won", skip_serializing_if = "Option::is_none")]
    pub r16_won: Option<i64>,
    #[serde(rename = "R16 Lost", skip_serializing_if = "Option::is_none")]
    pub r16_lost: Option<i64>,
    #[serde(rename = "QF Won", skip_serializing_if = "Option::is_none")]
    pub qf_won: Option<i64>,
    #[serde(rename = "QF Lost", skip_serializing_if = "Option::is_none")]
    pub qf_lost: Option<i64>,
    #[serde(rename = "SF Won", skip_serializing_if = "Option::is_none")]
    pub sf_won: Option<i64>,
    #[serde(rename = "SF Lost", skip_serializing_if = "Option::is_none")]
    pub sf_lost: Option<i64>,
    #[serde(rename = "Finals Won", skip_serializing_if = "Option::is_none")]
    pub finals_won: Option<i64>,
    #[serde(rename = "Finals Lost", skip_serializing_if = "Option::is_none")]
    pub finals_lost: Option<i64>,

    #[serde(rename = "Bracket Won", skip_serializing_if = "Option::is_none")]
    pub bracket_won: Option<i64>,
    #[serde(rename = "Bracket Lost", skip_serializing_if = "Option::is_none")]
    pub bracket_lost: Option<i64>,
    #[serde(rename = "Bracket Played", skip_serializing_if = "Option::is_none")]
    pub bracket_played: Option<i64>,

    #[serde(rename = "Total Won", skip_serializing_if = "Option::is_none")]
    pub total_won: Option<i64>,
    #[serde(rename = "Total Lost", skip_serializing_if = "Option::is_none")]
    pub total_lost: Option<i64>,
    #[serde(rename = "Total Played", skip_serializing_if = "Option::is_none")]
    pub total_played: Option<i64>,
    #[serde(rename = "Win %", skip_serializing_if = "Option::is_none")]
    pub win_pct: Option<f64>,

    #[serde(rename = "Final Rank", skip_serializing_if = "Option::is_none")]
    pub final_rank: Option<i64>,
    #[serde(rename = "BOD Finish", skip_serializing_if = "Option::is_none")]
    pub bod_finish: Option<i64>,

    #[serde(rename = "Home", skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Columns outside the known vocabulary (kept for All Scores only)
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl TournamentResult {
    pub fn new(player_1: impl Into<String>, player_2: impl Into<String>) -> Self {
        Self {
            player_1: player_1.into(),
            player_2: player_2.into(),
            ..Default::default()
        }
    }
}

/// One tournament row of the Champions sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "BOD#", skip_serializing_if = "Option::is_none")]
    pub bod_number: Option<FieldValue>,
    #[serde(rename = "Format", skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "Champions", skip_serializing_if = "Option::is_none")]
    pub champions: Option<String>,
    #[serde(rename = "Finalists", skip_serializing_if = "Option::is_none")]
    pub finalists: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Notes", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One player row of the All Players sheet, values kept as the sheet had them
///
/// Career columns may hold spreadsheet error tokens such as `#DIV/0!`;
/// they are only coerced when the application format is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "BOD's Played", skip_serializing_if = "Option::is_none")]
    pub bods_played: Option<FieldValue>,
    #[serde(rename = "Best Result", skip_serializing_if = "Option::is_none")]
    pub best_result: Option<FieldValue>,
    #[serde(rename = "AVG Finish", skip_serializing_if = "Option::is_none")]
    pub avg_finish: Option<FieldValue>,
    #[serde(rename = "Games Played", skip_serializing_if = "Option::is_none")]
    pub games_played: Option<FieldValue>,
    #[serde(rename = "Games Won", skip_serializing_if = "Option::is_none")]
    pub games_won: Option<FieldValue>,
    #[serde(rename = "Winning %", skip_serializing_if = "Option::is_none")]
    pub winning_pct: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let mut result = TournamentResult::new("A", "B");
        result.date = Some("2024-01-01".into());
        result.rr_won = Some(0);

        let json = serde_json::to_value(&result).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert_eq!(keys, vec!["Date", "Player 1", "Player 2", "RR Won"]);
        assert_eq!(json["RR Won"], 0);
    }

    #[test]
    fn test_extra_columns_round_trip_through_flatten() {
        let json = r#"{"Date":"2024-01-01","Player 1":"A","Player 2":"B","BOD Finish":1,"Tiebreakers":"coin"}"#;
        let result: TournamentResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.bod_finish, Some(1));
        assert_eq!(
            result.extra.get("Tiebreakers"),
            Some(&FieldValue::Text("coin".into()))
        );
    }
}
