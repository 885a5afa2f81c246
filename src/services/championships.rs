use std::collections::BTreeSet;

use anyhow::Result;
use log::{info, warn};
use serde_json::Value;

use crate::adapter::{app_profile, PlayerAdapter, Record};
use crate::aggregate::{
    apply_championships, build_championships, distribution, is_champion, top_champions,
    total_awarded, ChampionshipCounts,
};
use crate::config::settings::AppConfig;
use crate::config::sheets::{ALL_PLAYERS_FILE, ALL_SCORES_FILE};
use crate::errors::ArchiveError;
use crate::store::JsonStore;

/// How many players were touched by one championship update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChampionshipUpdate {
    pub updated: usize,
    pub players: usize,
    pub champions: usize,
}

pub struct ChampionshipService {
    config: AppConfig,
    store: JsonStore,
}

impl ChampionshipService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = JsonStore::existing(&config.paths.output_dir);
        Ok(Self { config, store })
    }

    pub fn with_store(config: AppConfig, store: JsonStore) -> Self {
        Self { config, store }
    }

    pub fn run(&self) -> Result<ChampionshipUpdate> {
        info!("=== Calculating Championships from All Scores ===\n");

        // Step 1: Count championships
        let counts = self.compute()?;
        self.log_summary(&counts);

        // Step 2: Write them into All Players
        let mut players = self.load_players()?;
        let update = self.apply(&mut players, &counts);
        self.store.save(ALL_PLAYERS_FILE, &players)?;
        info!("  → Updated {} of {} players\n", update.updated, update.players);

        info!("=== Championships Complete ===");
        Ok(update)
    }

    /// Per-player counts recomputed from All Scores.json
    pub fn compute(&self) -> Result<ChampionshipCounts> {
        info!("Step 1: Counting championships...");

        let scores: Vec<Record> = self
            .store
            .load(ALL_SCORES_FILE)?
            .ok_or_else(|| ArchiveError::MissingInput(self.store.path_for(ALL_SCORES_FILE)))?;

        let counts = build_championships(&scores);
        let winners = scores.iter().filter(|entry| is_champion(entry)).count();
        info!("  → {} championship entries across {} score records", winners, scores.len());
        Ok(counts)
    }

    pub fn apply(&self, players: &mut [Record], counts: &ChampionshipCounts) -> ChampionshipUpdate {
        let champions = apply_championships(players, counts);

        let names: BTreeSet<&str> = players
            .iter()
            .filter_map(|player| player.get("name").and_then(Value::as_str))
            .collect();
        let missing = counts.keys().filter(|name| !names.contains(name.as_str())).count();
        if missing > 0 {
            warn!("  {} champions have no entry in {}", missing, ALL_PLAYERS_FILE);
        }

        ChampionshipUpdate {
            updated: champions,
            players: players.len(),
            champions: counts.len(),
        }
    }

    fn load_players(&self) -> Result<Vec<Record>> {
        info!("Step 2: Updating {}...", ALL_PLAYERS_FILE);

        let players: Vec<Record> = self
            .store
            .load(ALL_PLAYERS_FILE)?
            .ok_or_else(|| ArchiveError::MissingInput(self.store.path_for(ALL_PLAYERS_FILE)))?;

        let app = PlayerAdapter::new(app_profile(&self.config.adapter));
        if !app.is_applied(&players) {
            return Err(ArchiveError::NotAppFormat(self.store.path_for(ALL_PLAYERS_FILE)).into());
        }
        Ok(players)
    }

    fn log_summary(&self, counts: &ChampionshipCounts) {
        info!("  → {} players with championships, {} awarded", counts.len(), total_awarded(counts));

        info!("Top champions:");
        for (rank, (name, count)) in top_champions(counts, self.config.adapter.top_champions)
            .into_iter()
            .enumerate()
        {
            info!("  {:>2}. {}: {}", rank + 1, name, count);
        }

        info!("Championship distribution:");
        for (championships, players) in distribution(counts).into_iter().rev() {
            info!("  {} championships: {} players", championships, players);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_scores_is_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        let service = ChampionshipService::with_store(AppConfig::default(), store);

        let err = service.run().unwrap_err();
        assert!(err.downcast_ref::<ArchiveError>().is_some());
    }

    #[test]
    fn test_counts_written_to_players() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        store
            .save(
                ALL_SCORES_FILE,
                &json!([
                    {"Player 1": "A", "Player 2": "B", "BOD Finish": 1},
                    {"Player 1": "C", "Player 2": "D", "BOD Finish": 2}
                ]),
            )
            .unwrap();
        store
            .save(ALL_PLAYERS_FILE, &json!([{"_id": "1", "name": "A"}, {"_id": "2", "name": "C"}]))
            .unwrap();

        let service = ChampionshipService::with_store(AppConfig::default(), store);
        let update = service.run().unwrap();

        assert_eq!(update, ChampionshipUpdate { updated: 1, players: 2, champions: 2 });

        let players: Vec<Record> = JsonStore::existing(temp_dir.path())
            .load(ALL_PLAYERS_FILE)
            .unwrap()
            .unwrap();
        assert_eq!(players[0]["totalChampionships"], 1);
        assert_eq!(players[1]["individualChampionships"], 0);
    }

    #[test]
    fn test_float_finish_in_saved_scores() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        store
            .save(
                ALL_SCORES_FILE,
                &json!([
                    {"Player 1": "A", "Player 2": "B", "BOD Finish": 1.0, "Round-1": 11.0},
                    {"Player 1": "C", "Player 2": "D", "BOD Finish": 2.0}
                ]),
            )
            .unwrap();

        let counts = ChampionshipService::with_store(AppConfig::default(), store)
            .compute()
            .unwrap();

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("A"), Some(&1));
        assert_eq!(counts.get("B"), Some(&1));
    }

    #[test]
    fn test_raw_players_are_left_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        store
            .save(ALL_SCORES_FILE, &json!([{"Player 1": "A", "Player 2": "B", "BOD Finish": 1}]))
            .unwrap();
        store
            .save(ALL_PLAYERS_FILE, &json!([{"Player Name": "A"}, {"Player Name": "B"}]))
            .unwrap();
        let before = std::fs::read_to_string(temp_dir.path().join(ALL_PLAYERS_FILE)).unwrap();

        let err = ChampionshipService::with_store(AppConfig::default(), store)
            .run()
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ArchiveError>(),
            Some(ArchiveError::NotAppFormat(_))
        ));
        let after = std::fs::read_to_string(temp_dir.path().join(ALL_PLAYERS_FILE)).unwrap();
        assert_eq!(before, after);
    }
}
