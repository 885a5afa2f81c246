use clap::ValueEnum;

use super::UNKNOWN_PLAYER;
use crate::config::AdapterSettings;

/// Where a target field takes its value from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Column(&'static str),
    /// `Player Name`, else any `... Unique Players` column
    PlayerName,
    /// Fresh UUID, shared by every `RecordId` field of the same record
    RecordId,
    /// Run timestamp, ISO-8601
    Timestamp,
    /// 1-based position in the input
    Sequence,
    /// Nothing in the source; the coercion default applies
    Missing,
}

/// How the source value is turned into the target value
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    Int(i64),
    Float(f64),
    Text(&'static str),
    /// Copied as-is, `null` when absent
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub target: &'static str,
    pub source: Source,
    pub coercion: Coercion,
}

impl FieldRule {
    pub const fn new(target: &'static str, source: Source, coercion: Coercion) -> Self {
        Self { target, source, coercion }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileKind {
    /// Front-end application format (camelCase, ids, timestamps)
    App,
    /// Legacy importer format (spreadsheet-style headers)
    Import,
}

/// Ordered mapping table for one downstream consumer
#[derive(Debug, Clone)]
pub struct Profile {
    pub kind: ProfileKind,
    /// Key whose presence in the input means the profile was already applied
    pub marker: &'static str,
    pub rules: Vec<FieldRule>,
}

impl Profile {
    pub fn for_kind(kind: ProfileKind, settings: &AdapterSettings) -> Self {
        match kind {
            ProfileKind::App => app_profile(settings),
            ProfileKind::Import => import_profile(settings),
        }
    }
}

/// Extracted All Players rows -> application player documents
pub fn app_profile(settings: &AdapterSettings) -> Profile {
    use Coercion::*;
    use Source::*;

    Profile {
        kind: ProfileKind::App,
        marker: "_id",
        rules: vec![
            FieldRule::new("_id", RecordId, Raw),
            FieldRule::new("id", RecordId, Raw),
            FieldRule::new("name", PlayerName, Text(UNKNOWN_PLAYER)),
            FieldRule::new("bodsPlayed", Column("BOD's Played"), Int(0)),
            FieldRule::new("bestResult", Column("Best Result"), Int(settings.missing_rank)),
            FieldRule::new("avgFinish", Column("AVG Finish"), Float(settings.missing_avg_finish)),
            FieldRule::new("gamesPlayed", Column("Games Played"), Int(0)),
            FieldRule::new("gamesWon", Column("Games Won"), Int(0)),
            FieldRule::new("winningPercentage", Column("Winning %"), Float(0.0)),
            // recomputed from All Scores after adaptation
            FieldRule::new("individualChampionships", Missing, Int(0)),
            // no division-level data exists in the archive
            FieldRule::new("divisionChampionships", Missing, Int(0)),
            FieldRule::new("totalChampionships", Missing, Int(0)),
            FieldRule::new("drawingSequence", Sequence, Raw),
            FieldRule::new("pairing", Missing, Raw),
            FieldRule::new("createdAt", Timestamp, Raw),
            FieldRule::new("updatedAt", Timestamp, Raw),
        ],
    }
}

/// Application player documents -> legacy importer rows
pub fn import_profile(settings: &AdapterSettings) -> Profile {
    use Coercion::*;
    use Source::*;

    Profile {
        kind: ProfileKind::Import,
        marker: "Games Played",
        rules: vec![
            FieldRule::new("name", Column("name"), Text(UNKNOWN_PLAYER)),
            FieldRule::new("Games Played", Column("gamesPlayed"), Int(0)),
            FieldRule::new("Games Won", Column("gamesWon"), Int(0)),
            FieldRule::new("Winning %", Column("winningPercentage"), Float(0.0)),
            FieldRule::new("BOD's Played", Column("bodsPlayed"), Int(0)),
            FieldRule::new("Best Result", Column("bestResult"), Int(settings.missing_rank)),
            FieldRule::new("AVG Finish", Column("avgFinish"), Float(settings.missing_avg_finish)),
            FieldRule::new("Ind Champs", Column("individualChampionships"), Int(0)),
            FieldRule::new("Div Champs", Column("divisionChampionships"), Int(0)),
            FieldRule::new("Champs", Column("totalChampionships"), Int(0)),
            FieldRule::new("Drawing Sequence", Column("drawingSequence"), Raw),
            FieldRule::new("Pairing", Column("pairing"), Raw),
            FieldRule::new("email", Missing, Raw),
            FieldRule::new("phone", Missing, Text("")),
            FieldRule::new("city", Missing, Text("")),
            FieldRule::new("state", Missing, Text("")),
            FieldRule::new("Division", Missing, Raw),
            FieldRule::new("Tournaments", Column("bodsPlayed"), Int(0)),
        ],
    }
}
