use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub type ChampionshipCounts = BTreeMap<String, u32>;

const PLAYER_COLUMNS: [&str; 2] = ["Player 1", "Player 2"];
const BOD_FINISH: &str = "BOD Finish";

/// A score entry that finished first; `1` and `1.0` both count
pub fn is_champion(entry: &Map<String, Value>) -> bool {
    entry.get(BOD_FINISH).and_then(Value::as_f64) == Some(1.0)
}

/// Championships per player: every `BOD Finish == 1` entry credits both players
///
/// Works on raw records so one oddly typed field never hides an entry.
pub fn build_championships(scores: &[Map<String, Value>]) -> ChampionshipCounts {
    let mut counts = ChampionshipCounts::new();

    for entry in scores.iter().filter(|entry| is_champion(entry)) {
        let players = PLAYER_COLUMNS
            .iter()
            .filter_map(|column| entry.get(*column).and_then(Value::as_str))
            .map(str::trim)
            .filter(|name| !name.is_empty());
        for player in players {
            *counts.entry(player.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

pub fn total_awarded(counts: &ChampionshipCounts) -> u32 {
    counts.values().sum()
}

/// Highest counts first, ties broken by name
pub fn top_champions(counts: &ChampionshipCounts, limit: usize) -> Vec<(&str, u32)> {
    let mut ranked: Vec<(&str, u32)> = counts.iter().map(|(name, &n)| (name.as_str(), n)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);
    ranked
}

/// championships -> number of players holding that many
pub fn distribution(counts: &ChampionshipCounts) -> BTreeMap<u32, usize> {
    let mut spread = BTreeMap::new();
    for &count in counts.values() {
        *spread.entry(count).or_insert(0) += 1;
    }
    spread
}

/// Write championship fields on app-format players, keyed by `name`.
///
/// Returns how many players hold at least one championship.
pub fn apply_championships(players: &mut [Map<String, Value>], counts: &ChampionshipCounts) -> usize {
    let mut champions = 0;

    for player in players.iter_mut() {
        let count = player
            .get("name")
            .and_then(Value::as_str)
            .and_then(|name| counts.get(name))
            .copied()
            .unwrap_or(0);

        player.insert("individualChampionships".into(), Value::from(count));
        player.insert("divisionChampionships".into(), Value::from(0));
        player.insert("totalChampionships".into(), Value::from(count));

        if count > 0 {
            champions += 1;
        }
    }

    champions
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(a: &str, b: &str, finish: Value) -> Map<String, Value> {
        json!({"Player 1": a, "Player 2": b, "BOD Finish": finish})
            .as_object()
            .unwrap()
            .clone()
    }

    fn sample_scores() -> Vec<Map<String, Value>> {
        vec![
            result("A", "B", json!(1)),
            result("C", "D", json!(2)),
            result("A", "C", json!(1)),
            result("E", "F", Value::Null),
            result("B", "D", json!(1)),
        ]
    }

    #[test]
    fn test_both_players_get_credit() {
        let counts = build_championships(&sample_scores());

        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&2));
        assert_eq!(counts.get("C"), Some(&1));
        assert_eq!(counts.get("D"), Some(&1));
        assert_eq!(counts.get("E"), None);
    }

    #[test]
    fn test_total_is_twice_the_winning_entries() {
        let scores = sample_scores();
        let winners = scores.iter().filter(|s| is_champion(s)).count() as u32;

        assert_eq!(total_awarded(&build_championships(&scores)), 2 * winners);
    }

    #[test]
    fn test_float_finish_counts_as_win() {
        let scores = vec![result("A", "B", json!(1.0)), result("C", "D", json!(2.0))];

        let counts = build_championships(&scores);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("A"), Some(&1));
        assert_eq!(counts.get("C"), None);
    }

    #[test]
    fn test_ranking_and_distribution() {
        let counts = build_championships(&sample_scores());

        assert_eq!(top_champions(&counts, 3), vec![("A", 2), ("B", 2), ("C", 1)]);

        let spread = distribution(&counts);
        assert_eq!(spread.get(&2), Some(&2));
        assert_eq!(spread.get(&1), Some(&2));
    }

    #[test]
    fn test_apply_sets_every_player() {
        let counts = build_championships(&sample_scores());
        let mut players = vec![
            json!({"name": "A", "totalChampionships": 9}).as_object().unwrap().clone(),
            json!({"name": "Z"}).as_object().unwrap().clone(),
        ];

        let champions = apply_championships(&mut players, &counts);

        assert_eq!(champions, 1);
        assert_eq!(players[0]["totalChampionships"], 2);
        assert_eq!(players[0]["individualChampionships"], 2);
        assert_eq!(players[0]["divisionChampionships"], 0);
        assert_eq!(players[1]["totalChampionships"], 0);
    }
}
