use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Loosely-typed column value for columns outside the known vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Extra columns, keyed by header; absent columns are simply not present
pub type ExtraFields = BTreeMap<String, FieldValue>;

/// Bracket matchup columns hold either an opponent label or a match number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Matchup {
    Number(i64),
    Label(String),
}
