//! Reshapes player records for downstream consumers.
//!
//! Each [`Profile`] is an ordered table of [`FieldRule`]s; output objects
//! carry exactly the table's keys, in table order.

mod coerce;
mod profile;

use chrono::Local;
use serde_json::{Map, Value};
use uuid::Uuid;

pub use coerce::{is_missing, safe_float, safe_int, safe_text};
pub use profile::{
    app_profile, import_profile, Coercion, FieldRule, Profile, ProfileKind, Source,
};

pub type Record = Map<String, Value>;

pub const UNKNOWN_PLAYER: &str = "Unknown Player";
const UNIQUE_PLAYERS: &str = "Unique Players";

pub struct PlayerAdapter {
    profile: Profile,
    timestamp: String,
}

impl PlayerAdapter {
    /// Timestamp is taken once, so every record of a run shares it
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// True when the first record already carries this profile's marker key
    pub fn is_applied(&self, records: &[Record]) -> bool {
        records
            .first()
            .is_some_and(|record| record.contains_key(self.profile.marker))
    }

    pub fn adapt_all(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.adapt(index, record))
            .collect()
    }

    pub fn adapt(&self, index: usize, record: &Record) -> Record {
        let record_id = Uuid::new_v4().to_string();
        let mut out = Record::new();

        for rule in &self.profile.rules {
            let source = match &rule.source {
                Source::Column(key) => record.get(*key).cloned(),
                Source::PlayerName => player_name(record),
                Source::RecordId => Some(Value::from(record_id.as_str())),
                Source::Timestamp => Some(Value::from(self.timestamp.as_str())),
                Source::Sequence => Some(Value::from(index as u64 + 1)),
                Source::Missing => None,
            };
            out.insert(rule.target.to_string(), coerce(source.as_ref(), &rule.coercion));
        }

        out
    }
}

fn coerce(value: Option<&Value>, coercion: &Coercion) -> Value {
    match coercion {
        Coercion::Int(default) => Value::from(safe_int(value, *default)),
        Coercion::Float(default) => Value::from(safe_float(value, *default)),
        Coercion::Text(default) => Value::from(safe_text(value, default)),
        Coercion::Raw => value.cloned().unwrap_or(Value::Null),
    }
}

/// `Player Name`, else the first `... Unique Players` column with text
fn player_name(record: &Record) -> Option<Value> {
    let non_empty = |value: &&Value| value.as_str().is_some_and(|s| !s.trim().is_empty());

    record
        .get("Player Name")
        .filter(non_empty)
        .or_else(|| {
            record
                .iter()
                .filter(|(key, _)| key.contains(UNIQUE_PLAYERS))
                .map(|(_, value)| value)
                .find(non_empty)
        })
        .cloned()
}
